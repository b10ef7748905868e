//! Draft-based editing of the curriculum document.
//!
//! An [`EditSession`] works on a clone of the stored content; nothing
//! reaches the store until [`EditSession::save`] commits the draft
//! wholesale. Cancelling drops the draft. Section-visibility flags are not
//! part of the draft; they write through to the store immediately, matching
//! the behavior of the visibility checkboxes in the display layer.

use crate::document::{
    self, EducationItem, ExperienceItem, PersonalInfo, Project, SkillCategory,
};
use crate::error::EditError;
use crate::store::CvStore;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// The editable content fields, cloned from the store at session start.
#[derive(Debug, Clone)]
struct Draft {
    personal: PersonalInfo,
    summary: String,
    experiences: Vec<ExperienceItem>,
    education: Vec<EducationItem>,
    skill_categories: Vec<SkillCategory>,
    projects: Vec<Project>,
}

/// One editing pass over the document.
pub struct EditSession {
    draft: Draft,
}

impl EditSession {
    pub fn begin(store: &CvStore) -> Self {
        Self {
            draft: Draft {
                personal: store.personal().clone(),
                summary: store.summary().to_string(),
                experiences: store.experiences().to_vec(),
                education: store.education().to_vec(),
                skill_categories: store.skill_categories().to_vec(),
                projects: store.projects().to_vec(),
            },
        }
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.draft.personal
    }

    pub fn personal_mut(&mut self) -> &mut PersonalInfo {
        &mut self.draft.personal
    }

    pub fn summary(&self) -> &str {
        &self.draft.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.draft.summary = summary.into();
    }

    /// Reads an image file, validates that it decodes, and stores it on the
    /// draft as a `data:<mime>;base64,` URL.
    pub fn set_profile_image_from_file(&mut self, path: &Path) -> Result<(), EditError> {
        let bytes = fs::read(path)?;
        let format =
            image::guess_format(&bytes).map_err(|e| EditError::Image(e.to_string()))?;
        image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| EditError::Image(e.to_string()))?;
        let data_url = format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(&bytes)
        );
        self.draft.personal.profile_image = Some(data_url);
        Ok(())
    }

    pub fn clear_profile_image(&mut self) {
        self.draft.personal.profile_image = None;
    }

    // --- Experience ---

    pub fn experiences(&self) -> &[ExperienceItem] {
        &self.draft.experiences
    }

    /// Appends an empty experience with a fresh identifier; returns its id.
    pub fn add_experience(&mut self) -> String {
        let id = document::next_id();
        self.draft.experiences.push(ExperienceItem {
            id: id.clone(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            technologies: Vec::new(),
        });
        id
    }

    /// Removes by positional filtering; an out-of-range index is a no-op.
    pub fn remove_experience(&mut self, index: usize) {
        if index < self.draft.experiences.len() {
            self.draft.experiences.remove(index);
        }
    }

    pub fn experience_mut(&mut self, index: usize) -> Option<&mut ExperienceItem> {
        self.draft.experiences.get_mut(index)
    }

    /// End dates of a current position are display-overridden to "Present"
    /// and not editable; edits against one are dropped.
    pub fn set_experience_end_date(&mut self, index: usize, end_date: impl Into<String>) {
        if let Some(item) = self.draft.experiences.get_mut(index) {
            if item.current {
                log::debug!("ignoring end-date edit on current position '{}'", item.id);
                return;
            }
            item.end_date = end_date.into();
        }
    }

    pub fn set_experience_current(&mut self, index: usize, current: bool) {
        if let Some(item) = self.draft.experiences.get_mut(index) {
            item.current = current;
        }
    }

    pub fn set_experience_technologies(&mut self, index: usize, input: &str) {
        if let Some(item) = self.draft.experiences.get_mut(index) {
            item.technologies = document::parse_comma_list(input);
        }
    }

    // --- Education ---

    pub fn education(&self) -> &[EducationItem] {
        &self.draft.education
    }

    pub fn add_education(&mut self) -> String {
        let id = document::next_id();
        self.draft.education.push(EducationItem {
            id: id.clone(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: None,
        });
        id
    }

    pub fn remove_education(&mut self, index: usize) {
        if index < self.draft.education.len() {
            self.draft.education.remove(index);
        }
    }

    pub fn education_mut(&mut self, index: usize) -> Option<&mut EducationItem> {
        self.draft.education.get_mut(index)
    }

    // --- Skills ---

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.draft.skill_categories
    }

    pub fn add_skill_category(&mut self) {
        self.draft.skill_categories.push(SkillCategory {
            name: String::new(),
            skills: Vec::new(),
        });
    }

    pub fn remove_skill_category(&mut self, index: usize) {
        if index < self.draft.skill_categories.len() {
            self.draft.skill_categories.remove(index);
        }
    }

    pub fn skill_category_mut(&mut self, index: usize) -> Option<&mut SkillCategory> {
        self.draft.skill_categories.get_mut(index)
    }

    pub fn set_skill_category_skills(&mut self, index: usize, input: &str) {
        if let Some(category) = self.draft.skill_categories.get_mut(index) {
            category.skills = document::parse_comma_list(input);
        }
    }

    // --- Projects ---

    pub fn projects(&self) -> &[Project] {
        &self.draft.projects
    }

    pub fn add_project(&mut self) -> String {
        let id = document::next_id();
        self.draft.projects.push(Project {
            id: id.clone(),
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            github_url: None,
            live_url: None,
            image_url: None,
        });
        id
    }

    pub fn remove_project(&mut self, index: usize) {
        if index < self.draft.projects.len() {
            self.draft.projects.remove(index);
        }
    }

    pub fn project_mut(&mut self, index: usize) -> Option<&mut Project> {
        self.draft.projects.get_mut(index)
    }

    pub fn set_project_technologies(&mut self, index: usize, input: &str) {
        if let Some(project) = self.draft.projects.get_mut(index) {
            project.technologies = document::parse_comma_list(input);
        }
    }

    /// Commits the draft wholesale: every owned list is replaced, never
    /// merged.
    pub fn save(self, store: &mut CvStore) {
        let draft = self.draft;
        store.set_personal(draft.personal);
        store.set_summary(draft.summary);
        store.set_experiences(draft.experiences);
        store.set_education(draft.education);
        store.set_skill_categories(draft.skill_categories);
        store.set_projects(draft.projects);
    }

    /// Discards the draft; the store is untouched.
    pub fn cancel(self) {}
}

/// Resets the whole document to its post-clear state, but only when the
/// `confirm` callback answers true. Returns whether the reset ran.
pub fn clear_all(store: &mut CvStore, confirm: impl FnOnce(&str) -> bool) -> bool {
    let confirmed = confirm(
        "Are you sure you want to clear the whole curriculum? This cannot be undone.",
    );
    if confirmed {
        store.clear_all();
    }
    confirmed
}

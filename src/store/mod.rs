//! Persistent document state.
//!
//! [`Persistence`] is the generic key-value wrapper: every logical field is
//! stored under a stable string key as JSON, reads fall back to a default on
//! any failure, and writes are best-effort. [`CvStore`] is the typed facade
//! holding the in-memory document and mirroring each mutation to the
//! backend. Both run on a single thread; exclusive access is enforced by
//! `&mut self`, not by locks.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use crate::document::{
    CvSnapshot, EducationItem, ExperienceItem, PersonalInfo, Project, Section,
    SectionVisibility, SkillCategory, defaults,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Storage keys, one per logical field.
pub mod keys {
    pub const PERSONAL_INFO: &str = "curriculum-personalInfo";
    pub const ABOUT_SUMMARY: &str = "curriculum-aboutSummary";
    pub const EXPERIENCES: &str = "curriculum-experiences";
    pub const EDUCATION: &str = "curriculum-education";
    pub const SKILL_CATEGORIES: &str = "curriculum-skillCategories";
    pub const PROJECTS: &str = "curriculum-projects";
    pub const SHOW_ABOUT: &str = "curriculum-showAbout";
    pub const SHOW_EXPERIENCE: &str = "curriculum-showExperience";
    pub const SHOW_EDUCATION: &str = "curriculum-showEducation";
    pub const SHOW_SKILLS: &str = "curriculum-showSkills";
    pub const SHOW_PROJECTS: &str = "curriculum-showProjects";
    pub const HAS_VISITED: &str = "has-visited";
}

/// Generic durable storage for JSON-serializable values.
///
/// `load` never fails and `set` never fails: a missing backend entry,
/// unparseable content or a failed write degrades to in-memory behavior
/// with a logged warning. The caller's value is authoritative either way.
pub struct Persistence {
    backend: Box<dyn StorageBackend>,
}

impl Persistence {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// File-backed persistence rooted at `data_dir`.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(Box::new(FileBackend::new(data_dir)))
    }

    /// Pure in-memory persistence for storage-less environments.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Returns the stored value for `key` if present and parseable,
    /// otherwise `fallback`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(text) = self.backend.read(key) else {
            return fallback;
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding unparseable stored value for '{key}': {e}");
                fallback
            }
        }
    }

    /// Serializes `value` and writes it under `key`, best-effort.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("cannot serialize value for '{key}': {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(key, &text) {
            log::warn!("cannot persist '{key}': {e}");
        }
    }

    /// Read-modify-write in one synchronous call. Returns the new value.
    pub fn update<T>(&mut self, key: &str, fallback: T, f: impl FnOnce(T) -> T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let next = f(self.load(key, fallback));
        self.set(key, &next);
        next
    }

    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            log::warn!("cannot remove '{key}': {e}");
        }
    }
}

/// The in-memory curriculum document with durable, automatically
/// synchronized storage behind every field.
pub struct CvStore {
    persistence: Persistence,
    personal: PersonalInfo,
    summary: String,
    experiences: Vec<ExperienceItem>,
    education: Vec<EducationItem>,
    skill_categories: Vec<SkillCategory>,
    projects: Vec<Project>,
    visibility: SectionVisibility,
}

impl CvStore {
    /// Loads every field from `persistence`, seeding defaults for anything
    /// absent or unparseable.
    pub fn with_persistence(persistence: Persistence) -> Self {
        let visibility = SectionVisibility {
            about: persistence.load(keys::SHOW_ABOUT, true),
            experience: persistence.load(keys::SHOW_EXPERIENCE, true),
            education: persistence.load(keys::SHOW_EDUCATION, true),
            skills: persistence.load(keys::SHOW_SKILLS, true),
            projects: persistence.load(keys::SHOW_PROJECTS, true),
        };
        Self {
            personal: persistence.load(keys::PERSONAL_INFO, defaults::personal_info()),
            summary: persistence.load(keys::ABOUT_SUMMARY, defaults::about_summary()),
            experiences: persistence.load(keys::EXPERIENCES, defaults::experiences()),
            education: persistence.load(keys::EDUCATION, defaults::education()),
            skill_categories: persistence
                .load(keys::SKILL_CATEGORIES, defaults::skill_categories()),
            projects: persistence.load(keys::PROJECTS, defaults::projects()),
            visibility,
            persistence,
        }
    }

    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::with_persistence(Persistence::open(data_dir))
    }

    pub fn in_memory() -> Self {
        Self::with_persistence(Persistence::in_memory())
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn experiences(&self) -> &[ExperienceItem] {
        &self.experiences
    }

    pub fn education(&self) -> &[EducationItem] {
        &self.education
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skill_categories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn visibility(&self) -> SectionVisibility {
        self.visibility
    }

    pub fn set_personal(&mut self, personal: PersonalInfo) {
        self.personal = personal;
        self.persistence.set(keys::PERSONAL_INFO, &self.personal);
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = summary;
        self.persistence.set(keys::ABOUT_SUMMARY, &self.summary);
    }

    /// Replaces the experience list wholesale; there is no partial merge.
    pub fn set_experiences(&mut self, experiences: Vec<ExperienceItem>) {
        self.experiences = experiences;
        self.persistence.set(keys::EXPERIENCES, &self.experiences);
    }

    pub fn set_education(&mut self, education: Vec<EducationItem>) {
        self.education = education;
        self.persistence.set(keys::EDUCATION, &self.education);
    }

    pub fn set_skill_categories(&mut self, skill_categories: Vec<SkillCategory>) {
        self.skill_categories = skill_categories;
        self.persistence
            .set(keys::SKILL_CATEGORIES, &self.skill_categories);
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.persistence.set(keys::PROJECTS, &self.projects);
    }

    pub fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.visibility.set(section, visible);
        let key = match section {
            Section::About => keys::SHOW_ABOUT,
            Section::Experience => keys::SHOW_EXPERIENCE,
            Section::Education => keys::SHOW_EDUCATION,
            Section::Skills => keys::SHOW_SKILLS,
            Section::Projects => keys::SHOW_PROJECTS,
        };
        self.persistence.set(key, &visible);
    }

    pub fn toggle_section(&mut self, section: Section) {
        self.set_section_visible(section, !self.visibility.is_visible(section));
    }

    /// True exactly once per data directory; marks the visit as a side
    /// effect. Drives the one-time welcome message.
    pub fn first_visit(&mut self) -> bool {
        let mut first = false;
        self.persistence.update(keys::HAS_VISITED, false, |visited| {
            first = !visited;
            true
        });
        first
    }

    /// Irreversibly resets the document: personal info and summary return
    /// to the seed values, the lists empty out and every section becomes
    /// visible again. Callers must confirm with the user first.
    pub fn clear_all(&mut self) {
        self.set_personal(defaults::personal_info());
        self.set_summary(defaults::about_summary());
        self.set_experiences(Vec::new());
        self.set_education(Vec::new());
        self.set_skill_categories(Vec::new());
        self.set_projects(Vec::new());
        for section in [
            Section::About,
            Section::Experience,
            Section::Education,
            Section::Skills,
            Section::Projects,
        ] {
            self.set_section_visible(section, true);
        }
    }

    /// By-value copy of the whole document for the export boundary.
    pub fn snapshot(&self) -> CvSnapshot {
        CvSnapshot {
            personal: self.personal.clone(),
            summary: self.summary.clone(),
            experiences: self.experiences.clone(),
            education: self.education.clone(),
            skill_categories: self.skill_categories.clone(),
            projects: self.projects.clone(),
            visibility: self.visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_applies_the_updater_to_the_stored_value() {
        let mut p = Persistence::in_memory();
        p.set("counter", &1i64);
        let next = p.update("counter", 0i64, |n| n + 1);
        assert_eq!(next, 2);
        assert_eq!(p.load("counter", 0i64), 2);
    }

    #[test]
    fn update_starts_from_the_fallback_when_absent() {
        let mut p = Persistence::in_memory();
        let next = p.update("missing", 10i64, |n| n * 2);
        assert_eq!(next, 20);
    }

    #[test]
    fn store_seeds_defaults_on_empty_backend() {
        let store = CvStore::in_memory();
        assert_eq!(store.experiences().len(), 2);
        assert_eq!(store.skill_categories().len(), 4);
        assert!(store.visibility().about);
    }

    #[test]
    fn first_visit_fires_once() {
        let mut store = CvStore::in_memory();
        assert!(store.first_visit());
        assert!(!store.first_visit());
    }

    #[test]
    fn clear_all_empties_lists_and_restores_visibility() {
        let mut store = CvStore::in_memory();
        store.set_summary("custom".into());
        store.set_section_visible(Section::Projects, false);
        store.clear_all();
        assert_eq!(store.summary(), defaults::about_summary());
        assert!(store.experiences().is_empty());
        assert!(store.projects().is_empty());
        assert!(store.visibility().projects);
    }
}

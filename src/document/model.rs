//! The curriculum document records.
//!
//! All records serialize with camelCase field names so the persisted JSON
//! layout stays compatible with earlier versions of the stored data
//! (`startDate`, `githubUrl`, `profileImage`, ...).

use serde::{Deserialize, Serialize};

/// The document owner. Singleton, one per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Profile picture as a `data:<mime>;base64,` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    /// Opaque identifier, unique within the owning list.
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, the end date renders as "Present" and is not editable.
    #[serde(default)]
    pub current: bool,
    pub description: String,
    /// Display order is list order.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// One entry in the education history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named group of skills. Carries no id; identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Which named content blocks are included in the view and in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    #[serde(default = "default_true")]
    pub about: bool,
    #[serde(default = "default_true")]
    pub experience: bool,
    #[serde(default = "default_true")]
    pub education: bool,
    #[serde(default = "default_true")]
    pub skills: bool,
    #[serde(default = "default_true")]
    pub projects: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            about: true,
            experience: true,
            education: true,
            skills: true,
            projects: true,
        }
    }
}

/// The five toggleable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::About => self.about,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        match section {
            Section::About => self.about = visible,
            Section::Experience => self.experience = visible,
            Section::Education => self.education = visible,
            Section::Skills => self.skills = visible,
            Section::Projects => self.projects = visible,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        self.set(section, !self.is_visible(section));
    }
}

/// An exclusively-owned, by-value copy of the whole document, taken at the
/// export boundary. Export never reads live state through this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvSnapshot {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub visibility: SectionVisibility,
}

//! The curriculum document: record types, seed data and identifiers.

pub mod defaults;
mod ids;
mod model;

pub use ids::next_id;
pub use model::{
    CvSnapshot, EducationItem, ExperienceItem, PersonalInfo, Project, Section, SectionVisibility,
    SkillCategory,
};

/// Splits comma-separated input into trimmed, non-empty tokens.
///
/// `"React, Node.js, , TypeScript"` becomes `["React", "Node.js",
/// "TypeScript"]`. Empty tokens are dropped rather than rejected.
pub fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_comma_list("React, Node.js, , TypeScript"),
            vec!["React", "Node.js", "TypeScript"]
        );
    }

    #[test]
    fn comma_list_of_blanks_is_empty() {
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,, ").is_empty());
    }

    #[test]
    fn visibility_defaults_to_all_visible() {
        let vis = SectionVisibility::default();
        for section in [
            Section::About,
            Section::Experience,
            Section::Education,
            Section::Skills,
            Section::Projects,
        ] {
            assert!(vis.is_visible(section));
        }
    }

    #[test]
    fn double_toggle_restores_visibility() {
        let before = SectionVisibility::default();
        let mut vis = before;
        vis.toggle(Section::Skills);
        assert!(!vis.skills);
        vis.toggle(Section::Skills);
        assert_eq!(vis, before);
    }

    #[test]
    fn stored_layout_uses_camel_case_names() {
        let item = &defaults::experiences()[0];
        let json = serde_json::to_value(item).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("start_date").is_none());

        let info = defaults::personal_info();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("linkedin").is_some());
        // Absent optionals are omitted entirely, not serialized as null.
        assert!(json.get("profileImage").is_none());
    }
}

//! Seed data used on first load and after a clear.

use super::model::{
    CvSnapshot, EducationItem, ExperienceItem, PersonalInfo, Project, SectionVisibility,
    SkillCategory,
};

/// The fully seeded document, as produced by a first load with an empty
/// backend.
pub fn snapshot() -> CvSnapshot {
    CvSnapshot {
        personal: personal_info(),
        summary: about_summary(),
        experiences: experiences(),
        education: education(),
        skill_categories: skill_categories(),
        projects: projects(),
        visibility: SectionVisibility::default(),
    }
}

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Your Full Name".into(),
        title: "Your Professional Title".into(),
        email: "you@example.com".into(),
        phone: "+1 555 000 0000".into(),
        location: "City, Country".into(),
        linkedin: Some("https://linkedin.com/in/your-profile".into()),
        github: Some("https://github.com/your-user".into()),
        website: Some("https://your-website.com".into()),
        profile_image: None,
    }
}

pub fn about_summary() -> String {
    "Passionate professional with experience in your field. Known for your \
     main strengths and specialized in your areas of expertise. Always \
     looking for opportunities to grow and to contribute to the success of \
     the projects I take part in."
        .into()
}

pub fn experiences() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            id: "1".into(),
            company: "Example Company Ltd.".into(),
            position: "Your Current Role".into(),
            start_date: "January 2022".into(),
            end_date: "Present".into(),
            current: true,
            description: "Summary of your responsibilities and main achievements in this role."
                .into(),
            technologies: vec!["Skill 1".into(), "Skill 2".into(), "Skill 3".into()],
        },
        ExperienceItem {
            id: "2".into(),
            company: "Previous Company".into(),
            position: "Previous Role".into(),
            start_date: "March 2020".into(),
            end_date: "December 2021".into(),
            current: false,
            description: "Summary of your responsibilities and achievements in this earlier role."
                .into(),
            technologies: vec!["Skill 1".into(), "Skill 2".into()],
        },
    ]
}

pub fn education() -> Vec<EducationItem> {
    vec![
        EducationItem {
            id: "1".into(),
            institution: "University or Institution".into(),
            degree: "Degree Obtained".into(),
            field: "Field of Study".into(),
            start_date: "2016".into(),
            end_date: "2020".into(),
            current: false,
            description: Some("Additional notes on your studies or specialization.".into()),
        },
        EducationItem {
            id: "2".into(),
            institution: "Training Institution".into(),
            degree: "Certification or Course".into(),
            field: "Area of Specialization".into(),
            start_date: "2020".into(),
            end_date: "2020".into(),
            current: false,
            description: None,
        },
    ]
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            name: "Technical Skills".into(),
            skills: vec![
                "Skill 1".into(),
                "Skill 2".into(),
                "Skill 3".into(),
                "Skill 4".into(),
                "Skill 5".into(),
            ],
        },
        SkillCategory {
            name: "Tools".into(),
            skills: vec![
                "Tool 1".into(),
                "Tool 2".into(),
                "Tool 3".into(),
                "Tool 4".into(),
            ],
        },
        SkillCategory {
            name: "Languages".into(),
            skills: vec![
                "Spanish (native)".into(),
                "English (advanced)".into(),
                "Another language".into(),
            ],
        },
        SkillCategory {
            name: "Soft Skills".into(),
            skills: vec![
                "Teamwork".into(),
                "Communication".into(),
                "Problem solving".into(),
                "Leadership".into(),
                "Project management".into(),
            ],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "Featured Project 1".into(),
            description: "What the project does, the goals it reached and the stack it uses."
                .into(),
            technologies: vec![
                "Technology 1".into(),
                "Technology 2".into(),
                "Technology 3".into(),
            ],
            github_url: Some("https://github.com/your-user/project".into()),
            live_url: Some("https://your-project.com".into()),
            image_url: None,
        },
        Project {
            id: "2".into(),
            name: "Featured Project 2".into(),
            description: "What the project does, the results obtained and the approach taken."
                .into(),
            technologies: vec!["Technology 1".into(), "Technology 2".into()],
            github_url: Some("https://github.com/your-user/project2".into()),
            live_url: None,
            image_url: None,
        },
    ]
}

mod common;

use common::TestResult;
use std::fs;
use vitae::document::defaults;
use vitae::store::keys;
use vitae::{CvStore, EducationItem, ExperienceItem, Persistence, Project, Section, SkillCategory};

fn custom_experiences() -> Vec<ExperienceItem> {
    vec![ExperienceItem {
        id: "exp-1".into(),
        company: "Acme".into(),
        position: "Engineer".into(),
        start_date: "January 2023".into(),
        end_date: "".into(),
        current: true,
        description: "Building things.".into(),
        technologies: vec!["Rust".into(), "PostgreSQL".into()],
    }]
}

#[test]
fn round_trip_persists_every_field_type() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;

    let mut personal = defaults::personal_info();
    personal.name = "Ada Lovelace".into();
    personal.website = None;
    personal.profile_image = Some("data:image/png;base64,AAAA".into());

    let education = vec![EducationItem {
        id: "edu-1".into(),
        institution: "Uni".into(),
        degree: "BSc".into(),
        field: "CS".into(),
        start_date: "2016".into(),
        end_date: "2020".into(),
        current: false,
        description: None,
    }];
    let skills = vec![SkillCategory {
        name: "Languages".into(),
        skills: vec!["Rust".into(), "SQL".into()],
    }];
    let projects = vec![Project {
        id: "prj-1".into(),
        name: "vitae".into(),
        description: "This".into(),
        technologies: vec![],
        github_url: Some("https://github.com/ada/vitae".into()),
        live_url: None,
        image_url: None,
    }];

    {
        let mut store = CvStore::open(dir.path());
        store.set_personal(personal.clone());
        store.set_summary("round trip".into());
        store.set_experiences(custom_experiences());
        store.set_education(education.clone());
        store.set_skill_categories(skills.clone());
        store.set_projects(projects.clone());
        store.set_section_visible(Section::Skills, false);
    }

    // A fresh store over the same directory simulates a reload.
    let store = CvStore::open(dir.path());
    assert_eq!(store.personal(), &personal);
    assert_eq!(store.summary(), "round trip");
    assert_eq!(store.experiences(), custom_experiences());
    assert_eq!(store.education(), education);
    assert_eq!(store.skill_categories(), skills);
    assert_eq!(store.projects(), projects);
    assert!(!store.visibility().skills);
    assert!(store.visibility().about);
    Ok(())
}

#[test]
fn corrupt_entries_fall_back_to_defaults() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;

    fs::write(dir.path().join("curriculum-experiences.json"), "not json {")?;
    fs::write(dir.path().join("curriculum-showAbout.json"), "\"maybe\"")?;

    let store = CvStore::open(dir.path());
    assert_eq!(store.experiences(), defaults::experiences());
    assert!(store.visibility().about);
    Ok(())
}

#[test]
fn generic_load_returns_fallback_when_absent() {
    let persistence = Persistence::in_memory();
    assert_eq!(persistence.load("nothing-here", 42i64), 42);
}

#[test]
fn generic_round_trip_preserves_nested_values() {
    let mut persistence = Persistence::in_memory();
    let value: Vec<Vec<Option<String>>> =
        vec![vec![Some("a".into()), None], vec![], vec![Some("b".into())]];
    persistence.set("nested", &value);
    let loaded: Vec<Vec<Option<String>>> = persistence.load("nested", Vec::new());
    assert_eq!(loaded, value);
}

#[test]
fn double_toggle_survives_a_reload_bit_for_bit() -> TestResult {
    let dir = tempfile::tempdir()?;
    let before = {
        let mut store = CvStore::open(dir.path());
        let before = store.visibility();
        store.toggle_section(Section::Projects);
        store.toggle_section(Section::Projects);
        before
    };
    let store = CvStore::open(dir.path());
    assert_eq!(store.visibility(), before);
    Ok(())
}

#[test]
fn one_file_per_logical_field() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut store = CvStore::open(dir.path());
    store.set_summary("x".into());
    store.set_section_visible(Section::About, false);
    assert!(dir.path().join(format!("{}.json", keys::ABOUT_SUMMARY)).exists());
    assert!(dir.path().join(format!("{}.json", keys::SHOW_ABOUT)).exists());
    Ok(())
}

#[test]
fn first_visit_marker_persists_across_reloads() -> TestResult {
    let dir = tempfile::tempdir()?;
    {
        let mut store = CvStore::open(dir.path());
        assert!(store.first_visit());
    }
    let mut store = CvStore::open(dir.path());
    assert!(!store.first_visit());
    Ok(())
}

#[test]
fn clear_all_round_trips_through_storage() -> TestResult {
    let dir = tempfile::tempdir()?;
    {
        let mut store = CvStore::open(dir.path());
        store.set_summary("customized".into());
        store.set_section_visible(Section::Education, false);
        store.clear_all();
    }
    let store = CvStore::open(dir.path());
    assert_eq!(store.summary(), defaults::about_summary());
    assert_eq!(store.personal(), &defaults::personal_info());
    assert!(store.experiences().is_empty());
    assert!(store.education().is_empty());
    assert!(store.skill_categories().is_empty());
    assert!(store.projects().is_empty());
    assert!(store.visibility().education);
    Ok(())
}

#[test]
fn storage_less_environment_degrades_to_memory() {
    // No backend directory anywhere; everything still works in memory.
    let mut store = CvStore::in_memory();
    store.set_summary("volatile".into());
    assert_eq!(store.summary(), "volatile");
    let snapshot = store.snapshot();
    assert_eq!(snapshot.summary, "volatile");
}

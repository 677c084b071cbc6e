use faculty_roster::app::lookup::lookup_student;
use faculty_roster::{NoopObserver, RosterConfig, RosterError, TracingObserver};
use std::sync::Arc;
use tempfile::TempDir;

fn write_roster(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("roster.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_roster_file_lookup_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        r#"
[faculty]
name = " MATH "

[[students]]
id = 11
first_name = "Olga"
last_name = "Orlova"
group_number = "M-201"
faculty_name = "MATH"

[[students]]
id = 4
first_name = " Petr "
last_name = "Kuznetsov"
group_number = "M-202"
faculty_name = "MATH"
"#,
    );

    let faculty = RosterConfig::from_file(&path)
        .unwrap()
        .into_faculty(Arc::new(TracingObserver))
        .unwrap();

    assert_eq!(faculty.name(), "MATH");
    let ids: Vec<i64> = faculty.students().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![11, 4]);

    let petr = lookup_student(&faculty, Some("4\n")).unwrap();
    assert_eq!(petr.first_name(), "Petr");

    let err = lookup_student(&faculty, Some("5")).unwrap_err();
    assert!(matches!(err, RosterError::StudentNotFound { id: 5 }));
}

#[test]
fn test_roster_file_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        r#"
[faculty]
name = "CS"

[[students]]
id = 1
first_name = "Ivan"
last_name = "Petrov"
group_number = "CS-101"
"#,
    );

    let result = RosterConfig::from_file(&path)
        .unwrap()
        .into_faculty(Arc::new(NoopObserver));
    match result {
        Err(RosterError::NullArgument { field }) => assert_eq!(field, "faculty_name"),
        other => panic!("expected NullArgument, got {:?}", other),
    }
}

#[test]
fn test_roster_file_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        r#"
[faculty]
name = "CS"

[[students]]
id = 1
first_name = "Ivan"
last_name = "Petrov"
group_number = "CS-101"
faculty_name = "CS"

[[students]]
id = 1
first_name = "Anna"
last_name = "Sidorova"
group_number = "CS-102"
faculty_name = "CS"
"#,
    );

    let result = RosterConfig::from_file(&path)
        .unwrap()
        .into_faculty(Arc::new(NoopObserver));
    assert!(matches!(result, Err(RosterError::DuplicateId { id: 1 })));
}

#[test]
fn test_roster_file_student_of_other_faculty() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        r#"
[faculty]
name = "CS"

[[students]]
id = 10
first_name = "Oleg"
last_name = "Smirnov"
group_number = "CS-103"
faculty_name = "MATH"
"#,
    );

    let err = RosterConfig::from_file(&path)
        .unwrap()
        .into_faculty(Arc::new(NoopObserver))
        .unwrap_err();
    assert!(err.to_string().contains("expected CS"));
}

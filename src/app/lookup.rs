use crate::domain::faculty::Faculty;
use crate::domain::model::Student;
use crate::domain::ports::RosterObserver;
use crate::utils::error::{RosterError, Result};
use std::io::BufRead;
use std::sync::Arc;

/// The roster used when no roster file is given.
pub fn demo_faculty(observer: Arc<dyn RosterObserver>) -> Result<Faculty> {
    let students = vec![
        Student::new(1, "Ivan", "Petrov", "CS-101", "CS")?,
        Student::new(2, "Anna", "Sidorova", "CS-102", "CS")?,
        Student::new(3, "Pavel", "Ivanov", "CS-101", "CS")?,
    ];
    Faculty::new_with_observer("CS", students, observer)
}

/// Reads a single line; `None` when the stream is already exhausted.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Parses a requested id. Missing and blank input are both `EmptyInput`.
pub fn parse_student_id(input: Option<&str>) -> Result<i64> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(RosterError::EmptyInput);
    }

    trimmed
        .parse::<i64>()
        .map_err(|source| RosterError::InvalidIdFormat {
            input: trimmed.to_string(),
            source,
        })
}

pub fn lookup_student<'a>(faculty: &'a Faculty, input: Option<&str>) -> Result<&'a Student> {
    let id = parse_student_id(input)?;
    tracing::debug!(id, faculty = faculty.name(), "Looking up student");
    faculty.get_by_id_or_fail(id)
}

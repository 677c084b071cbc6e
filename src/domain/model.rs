use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{require_text, validate_positive_id, validate_required_field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An enrolled student. Immutable once constructed; identity is the `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    id: i64,
    first_name: String,
    last_name: String,
    group_number: String,
    faculty_name: String,
}

impl Student {
    /// Validates and builds a student. Text fields are stored trimmed.
    pub fn new(
        id: i64,
        first_name: &str,
        last_name: &str,
        group_number: &str,
        faculty_name: &str,
    ) -> Result<Self> {
        validate_positive_id("id", id)?;
        Ok(Self {
            id,
            first_name: require_text("first_name", first_name)?,
            last_name: require_text("last_name", last_name)?,
            group_number: require_text("group_number", group_number)?,
            faculty_name: require_text("faculty_name", faculty_name)?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn group_number(&self) -> &str {
        &self.group_number
    }

    pub fn faculty_name(&self) -> &str {
        &self.faculty_name
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id={}, firstName={}, lastName={}, group={}, faculty={}}}",
            self.id, self.first_name, self.last_name, self.group_number, self.faculty_name
        )
    }
}

/// Unvalidated student data as it arrives from a roster file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_number: Option<String>,
    pub faculty_name: Option<String>,
}

impl TryFrom<StudentRecord> for Student {
    type Error = RosterError;

    fn try_from(record: StudentRecord) -> Result<Self> {
        let id = *validate_required_field("id", &record.id)?;
        let first_name = validate_required_field("first_name", &record.first_name)?;
        let last_name = validate_required_field("last_name", &record.last_name)?;
        let group_number = validate_required_field("group_number", &record.group_number)?;
        let faculty_name = validate_required_field("faculty_name", &record.faculty_name)?;

        Student::new(id, first_name, last_name, group_number, faculty_name)
    }
}

use crate::domain::faculty::Faculty;
use crate::domain::model::{Student, StudentRecord};
use crate::domain::ports::RosterObserver;
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A faculty and its students as stored in a TOML roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub faculty: FacultyConfig,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyConfig {
    pub name: String,
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds the faculty; every record must convert and pass faculty validation.
    pub fn into_faculty(self, observer: Arc<dyn RosterObserver>) -> Result<Faculty> {
        self.validate()?;

        let students = self
            .students
            .into_iter()
            .map(Student::try_from)
            .collect::<Result<Vec<_>>>()?;

        Faculty::new_with_observer(&self.faculty.name, students, observer)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("faculty.name", &self.faculty.name)
    }
}

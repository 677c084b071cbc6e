use crate::utils::error::{RosterError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "faculty-roster")]
#[command(about = "Look up a student of a faculty roster by id")]
pub struct CliConfig {
    #[arg(long, help = "TOML roster file; the built-in CS roster is used when omitted")]
    pub roster: Option<PathBuf>,

    #[arg(long, help = "Student id to look up; read from stdin when omitted")]
    pub id: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value = "text")]
    pub log_format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster {
            if !path.is_file() {
                return Err(RosterError::ConfigError {
                    message: format!("roster file not found: {}", path.display()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["faculty-roster"]);
        assert!(config.roster.is_none());
        assert!(config.id.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_format, OutputFormat::Text);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_flags() {
        let config = CliConfig::parse_from([
            "faculty-roster",
            "--roster",
            "roster.toml",
            "--id",
            "2",
            "--format",
            "json",
            "--log-format",
            "json",
            "--verbose",
        ]);
        assert_eq!(config.roster, Some(PathBuf::from("roster.toml")));
        assert_eq!(config.id.as_deref(), Some("2"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_roster_file_fails_validation() {
        let config = CliConfig::parse_from(["faculty-roster", "--roster", "/no/such/roster.toml"]);
        assert!(matches!(
            config.validate(),
            Err(RosterError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_id_is_kept_as_raw_text() {
        let config = CliConfig::parse_from(["faculty-roster", "--id", "abc"]);
        assert_eq!(config.id.as_deref(), Some("abc"));
    }
}

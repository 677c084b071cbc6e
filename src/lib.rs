pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::TracingObserver;
pub use config::RosterConfig;
pub use domain::faculty::Faculty;
pub use domain::model::{Student, StudentRecord};
pub use domain::ports::{NoopObserver, RosterObserver};
pub use utils::error::{RosterError, Result};

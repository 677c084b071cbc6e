use anyhow::Context;
use clap::Parser;
use faculty_roster::app::lookup::{demo_faculty, lookup_student, read_line};
use faculty_roster::utils::{logger, validation::Validate};
use faculty_roster::{
    CliConfig, Faculty, OutputFormat, RosterConfig, RosterError, RosterObserver, TracingObserver,
};
use std::io::Write;
use std::sync::Arc;

fn load_faculty(config: &CliConfig) -> anyhow::Result<Faculty> {
    let observer: Arc<dyn RosterObserver> = Arc::new(TracingObserver);
    let faculty = match &config.roster {
        Some(path) => RosterConfig::from_file(path)
            .and_then(|roster| roster.into_faculty(observer))
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => demo_faculty(observer).context("Failed to build the demo roster")?,
    };
    Ok(faculty)
}

fn run(config: &CliConfig, faculty: &Faculty) -> faculty_roster::Result<()> {
    let input = match &config.id {
        Some(id) => Some(id.clone()),
        None => {
            println!("Faculty: {}", faculty);
            print!("Enter student id to search: ");
            std::io::stdout().flush()?;
            let line = read_line(&mut std::io::stdin().lock())?;
            if line.is_none() {
                tracing::warn!("No input provided");
            }
            line
        }
    };

    let student = lookup_student(faculty, input.as_deref())?;
    match config.format {
        OutputFormat::Text => println!("Found: {}", student),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(student)?),
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let faculty = match load_faculty(&config) {
        Ok(faculty) => faculty,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &faculty) {
        match &e {
            RosterError::StudentNotFound { id } => tracing::info!(id, "Student not found"),
            other => tracing::error!("Lookup failed: {}", other),
        }
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

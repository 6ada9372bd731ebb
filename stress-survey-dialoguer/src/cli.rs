//! Command-line entry point for the `stress-test` binary.

use std::path::PathBuf;

use clap::Parser;
use stress_survey::{Config, config::CONFIG_FILE_NAME, pss};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{DialoguerBackend, DialoguerError};

/// Take the perceived stress questionnaire in the terminal.
#[derive(Debug, Parser)]
#[command(name = "stress-test", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, env = "STRESS_TEST_CONFIG", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Disable colored prompts.
    #[arg(long)]
    pub plain: bool,
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.display.log_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl Cli {
    pub fn backend(&self, config: &Config) -> DialoguerBackend {
        if self.plain || !config.display.colorful {
            DialoguerBackend::plain()
        } else {
            DialoguerBackend::new()
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)?;
    init_tracing(&config);
    info!(config = %cli.config.display(), "Starting questionnaire");

    let mut engine = pss::engine(&config);
    let outcome = match engine.run(cli.backend(&config)) {
        Ok(outcome) => outcome,
        Err(err)
            if err
                .downcast_ref::<DialoguerError>()
                .is_some_and(DialoguerError::is_cancelled) =>
        {
            info!("Questionnaire cancelled");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    info!(
        score = ?outcome.score,
        submitted = outcome.submitted_link.is_some(),
        "Questionnaire finished"
    );
    Ok(())
}

use clap::Parser;
use stress_survey_dialoguer::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    cli::run(Cli::parse())
}

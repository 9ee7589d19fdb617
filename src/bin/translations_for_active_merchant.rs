//! Copies the bundled locale file into an application's `config/locales`.

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use validateable::generator::{TranslationsGenerator, GENERATOR_NAME};

#[derive(Parser)]
#[command(name = GENERATOR_NAME)]
#[command(about = "Install the active_merchant locale file into config/locales")]
struct Cli {
    /// Application root receiving config/locales
    #[arg(value_name = "DESTINATION", default_value = ".")]
    destination: PathBuf,

    /// Overwrite a locale file that differs from the bundled one
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let command = Cli::command();
    let usage = TranslationsGenerator::banner(command.get_name());
    let matches = command.override_usage(usage).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let generator = TranslationsGenerator::new(&cli.destination).with_force(cli.force);

    let actions = generator
        .run()
        .with_context(|| format!("installing translations into {}", cli.destination.display()))?;

    for action in actions {
        println!("{:>10}  {}", action.label(), action.path().display());
    }

    Ok(())
}

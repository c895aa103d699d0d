#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;
use clap::Parser;

pub mod address;
mod app;
mod cli;
pub mod error;
mod logger;
pub mod providers;
pub mod results;
mod steps;
mod user_config;

pub use error::InputError;

/// Runs the main application logic.
///
/// Parses command-line arguments and environment, merges in the user config
/// file, validates the address and format, performs the lookup and prints the
/// rendered result to stdout.
///
/// # Errors
///
/// Returns an error if the address is missing or invalid, the format is
/// unknown, the HTTP client cannot be built, or the config file cannot be
/// saved. A failed lookup is not an error: it is rendered like any other
/// result.
pub async fn run() -> Result<()> {
  let cli = cli::Cli::parse();
  logger::init_logger(cli.verbose)?;

  let app = app::App::new(cli, user_config::load());
  app.run().await
}

//! Logger initialization.

use console::style;
use log::{Level, LevelFilter, SetLoggerError};
use std::io::Write;

/// Maps the number of `-v` flags to a level filter.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` directives are applied after the verbosity level, so
/// `RUST_LOG=ipgeo=trace` still works without `-vvv`.
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init_logger(verbosity: u8) -> Result<(), SetLoggerError> {
  let mut builder = env_logger::Builder::new();
  builder.filter_level(level_for(verbosity));
  builder.filter_module("reqwest", LevelFilter::Info);
  builder.filter_module("hyper", LevelFilter::Info);
  builder.filter_module("hyper_util", LevelFilter::Info);
  builder.parse_default_env();

  builder.format(|buf, record| {
    let level = match record.level() {
      Level::Error => style("ERROR").red(),
      Level::Warn => style("WARN").yellow(),
      Level::Info => style("INFO").green(),
      Level::Debug => style("DEBUG").blue(),
      Level::Trace => style("TRACE").magenta(),
    };
    writeln!(
      buf,
      "[{}] {}: {}",
      level.for_stderr(),
      record.target(),
      record.args()
    )
  });

  builder.try_init()
}

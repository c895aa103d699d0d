use crate::{
  address::Address,
  error::InputError,
  providers::geo::GeoClient,
  results::{LookupResult, OutputFormat},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Validates the raw inputs, in order: address present, address well-formed,
/// format recognised.
pub fn validate_step(
  address: Option<&str>,
  format: &str,
) -> Result<(Address, OutputFormat), InputError> {
  let address = match address {
    Some(a) if !a.is_empty() => Address::parse(a)?,
    _ => return Err(InputError::MissingAddress),
  };
  let format = format.parse::<OutputFormat>()?;
  Ok((address, format))
}

/// Runs the lookup behind a stderr spinner. Failures are part of the result.
pub async fn lookup_step(
  client: &GeoClient,
  address: &Address,
) -> LookupResult {
  let spinner = ProgressBar::new_spinner();
  if let Ok(spinner_style) = ProgressStyle::with_template("{spinner} {msg}") {
    spinner.set_style(spinner_style);
  }
  spinner.set_message(format!("Fetching geolocation for {address}..."));
  spinner.enable_steady_tick(Duration::from_millis(100));

  let result = client.lookup(address).await;

  spinner.finish_and_clear();
  result
}

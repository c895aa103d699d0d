use crate::error::InputError;
use crate::providers::geo::{Info, FIELDS};
use console::style;
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

const INFO_MARKER: &str = "[*]";
const ERROR_MARKER: &str = "[!]";
const SEPARATOR_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 25;
const NOT_AVAILABLE: &str = "N/A";

pub const USAGE: &str = "Usage: ipgeo <IP> [--format text|json|csv]";

/// A successful lookup: typed fields plus the response exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct Geolocation {
  pub info: Info,
  pub raw: Map<String, Value>,
}

/// Outcome of one geolocation lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
  Success(Geolocation),
  /// Why the lookup could not be completed.
  Failure(String),
}

/// Output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
  /// Human-readable block
  #[default]
  Text,
  /// Pretty-printed JSON
  Json,
  /// Header line plus one data line
  Csv,
}

impl FromStr for OutputFormat {
  type Err = InputError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      "csv" => Ok(Self::Csv),
      _ => Err(InputError::InvalidFormat(s.to_string())),
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Text => write!(f, "text"),
      Self::Json => write!(f, "json"),
      Self::Csv => write!(f, "csv"),
    }
  }
}

/// Renders `result` in `format`. The returned text ends with a newline.
#[must_use]
pub fn render(result: &LookupResult, format: OutputFormat) -> String {
  match format {
    OutputFormat::Text => render_text(result),
    OutputFormat::Json => render_json(result),
    OutputFormat::Csv => render_csv(result),
  }
}

/// Bordered block with one padded row per field; absent fields show `N/A`.
#[must_use]
pub fn render_text(result: &LookupResult) -> String {
  let geo = match result {
    LookupResult::Success(geo) => geo,
    LookupResult::Failure(message) => {
      return format!("{} {message}\n", style(ERROR_MARKER).red());
    }
  };

  let separator = "=".repeat(SEPARATOR_WIDTH);
  let mut out = String::new();
  out.push('\n');
  out.push_str(&format!(
    "{} IP Geolocation Information\n",
    style(INFO_MARKER).blue()
  ));
  out.push_str(&separator);
  out.push('\n');
  for (field, value) in FIELDS.iter().zip(geo.info.values()) {
    let label = format!("{}:", field.label);
    let value = value.as_deref().unwrap_or(NOT_AVAILABLE).to_string();
    out.push_str(&format!(
      "  {label:<width$} {value}\n",
      width = LABEL_WIDTH
    ));
  }
  out.push_str(&separator);
  out.push_str("\n\n");
  out
}

/// The raw response on success, `{"status": "fail", "message": ...}` on
/// failure, pretty-printed with keys in their original order.
#[must_use]
pub fn render_json(result: &LookupResult) -> String {
  let value = match result {
    LookupResult::Success(geo) => Value::Object(geo.raw.clone()),
    LookupResult::Failure(message) => {
      json!({ "status": "fail", "message": message })
    }
  };
  format!("{value:#}\n")
}

/// Header of machine keys and one data row; absent fields are empty.
///
/// Values are not quoted, so a comma or newline inside a value shifts the
/// columns.
#[must_use]
pub fn render_csv(result: &LookupResult) -> String {
  let geo = match result {
    LookupResult::Success(geo) => geo,
    LookupResult::Failure(message) => return format!("Error,{message}\n"),
  };

  let header: Vec<&str> = FIELDS.iter().map(|f| f.key).collect();
  let row: Vec<String> = geo
    .info
    .values()
    .into_iter()
    .map(Option::unwrap_or_default)
    .collect();
  format!("{}\n{}\n", header.join(","), row.join(","))
}

/// Prints an error line to stderr, with the usage hint when the address was
/// missing.
pub fn print_error(err: &anyhow::Error) {
  eprintln!("{} Error: {err:#}", style(ERROR_MARKER).red().for_stderr());
  if matches!(
    err.downcast_ref::<InputError>(),
    Some(InputError::MissingAddress)
  ) {
    eprintln!("{USAGE}");
  }
}

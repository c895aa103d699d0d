use thiserror::Error;

/// Problems with the user's input, detected before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
  /// No address was given, or it was empty.
  #[error("IP address is required")]
  MissingAddress,

  /// The address is not an IPv4 or IPv6 literal.
  #[error("'{0}' is not a valid IP address")]
  InvalidAddress(String),

  /// The format selector is not one of `text`, `json` or `csv`.
  #[error("Invalid format '{0}'. Use: text, json, or csv")]
  InvalidFormat(String),
}

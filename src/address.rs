//! IP address literal validation.

use crate::error::InputError;
use std::fmt;
use std::net::IpAddr;

/// Returns `true` if `candidate` is an IPv4 dotted quad or an IPv6 literal.
///
/// The standard library grammar is used as-is: no trimming, no DNS, and no
/// IPv6 zone identifiers (`fe80::1%eth0` is rejected).
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
  candidate.parse::<IpAddr>().is_ok()
}

/// A validated IP address literal, kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
  /// Validates `candidate` and wraps it.
  ///
  /// # Errors
  ///
  /// Returns [`InputError::InvalidAddress`] if `candidate` is not a valid
  /// IPv4 or IPv6 literal.
  pub fn parse(candidate: &str) -> Result<Self, InputError> {
    if is_valid(candidate) {
      Ok(Self(candidate.to_string()))
    } else {
      Err(InputError::InvalidAddress(candidate.to_string()))
    }
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepts_ipv4() {
    assert!(is_valid("192.168.1.1"));
    assert!(is_valid("8.8.8.8"));
    assert!(is_valid("0.0.0.0"));
    assert!(is_valid("255.255.255.255"));
  }

  #[test]
  fn test_accepts_ipv6() {
    assert!(is_valid("::1"));
    assert!(is_valid("::"));
    assert!(is_valid("2001:4860:4860::8888"));
    assert!(is_valid("fe80::1"));
    assert!(is_valid("::ffff:192.0.2.1"));
  }

  #[test]
  fn test_rejects_out_of_range() {
    assert!(!is_valid("999.1.1.1"));
    assert!(!is_valid("256.1.1.1"));
    assert!(!is_valid("1.2.3.256"));
    assert!(!is_valid("1::10000"));
  }

  #[test]
  fn test_rejects_malformed() {
    assert!(!is_valid(""));
    assert!(!is_valid("1.2.3"));
    assert!(!is_valid("1.2.3.4.5"));
    assert!(!is_valid("example.com"));
    assert!(!is_valid("1.2.3.x"));
    assert!(!is_valid("2001:db8::g"));
    assert!(!is_valid("1:2:3:4:5:6:7:8:9"));
  }

  #[test]
  fn test_no_trimming() {
    assert!(!is_valid(" 8.8.8.8"));
    assert!(!is_valid("8.8.8.8 "));
    assert!(!is_valid("\t::1\n"));
  }

  #[test]
  fn test_rejects_zone_identifier() {
    assert!(!is_valid("fe80::1%eth0"));
    assert!(!is_valid("fe80::1%1"));
  }

  #[test]
  fn test_parse_keeps_literal() {
    let addr = Address::parse("2001:0db8::0001").expect("valid literal");
    assert_eq!(addr.as_str(), "2001:0db8::0001");
    assert_eq!(addr.to_string(), "2001:0db8::0001");
  }

  #[test]
  fn test_parse_invalid() {
    assert_eq!(
      Address::parse("256.1.1.1"),
      Err(InputError::InvalidAddress("256.1.1.1".to_string()))
    );
  }
}

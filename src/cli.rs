use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "ipgeo", version)]
#[command(
  about = "Look up geolocation info for an IP address.",
  long_about = "A command-line utility that resolves an IPv4 or IPv6 address to geolocation metadata (country, region, city, coordinates, ISP, AS, timezone and network flags) using ip-api.com, and prints it as text, JSON or CSV."
)]
pub struct Cli {
  /// The IP address to geolocate.
  #[arg(env = "ARG_IP", value_name = "IP")]
  pub address: Option<String>,

  /// Output format: text, json or csv (case-insensitive). Defaults to text.
  #[arg(short, long, env = "ARG_FORMAT", value_name = "FORMAT")]
  pub format: Option<String>,

  /// Base URL of the geolocation service.
  #[arg(long, env = "IPGEO_BASE_URL", value_name = "URL")]
  pub base_url: Option<String>,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,

  /// Persist the --format and --base-url values into the user config file.
  #[arg(long, conflicts_with = "config_show")]
  pub save_config: bool,

  /// Print the current merged configuration and exit.
  #[arg(long)]
  pub config_show: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_args(args: &[&str]) -> Vec<String> {
    std::iter::once("ipgeo".to_string())
      .chain(args.iter().map(std::string::ToString::to_string))
      .collect()
  }

  #[test]
  fn test_basic_address() {
    let args = make_args(&["8.8.8.8"]);
    let cli = Cli::try_parse_from(args).expect("Should parse basic address");
    assert_eq!(cli.address.as_deref(), Some("8.8.8.8"));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.save_config);
    assert!(!cli.config_show);
  }

  #[test]
  fn test_format_flag() {
    let args = make_args(&["::1", "--format", "JSON"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --format");
    assert_eq!(cli.format.as_deref(), Some("JSON"));

    let args = make_args(&["::1", "-f", "csv"]);
    let cli = Cli::try_parse_from(args).expect("Should parse -f");
    assert_eq!(cli.format.as_deref(), Some("csv"));
  }

  #[test]
  fn test_format_is_not_validated_by_parser() {
    let args = make_args(&["8.8.8.8", "--format", "yaml"]);
    let cli = Cli::try_parse_from(args).expect("Format is free text");
    assert_eq!(cli.format.as_deref(), Some("yaml"));
  }

  #[test]
  fn test_invalid_address_is_not_validated_by_parser() {
    let args = make_args(&["256.1.1.1"]);
    let cli = Cli::try_parse_from(args).expect("Address is free text");
    assert_eq!(cli.address.as_deref(), Some("256.1.1.1"));
  }

  #[test]
  fn test_base_url_flag() {
    let args = make_args(&["1.1.1.1", "--base-url", "http://localhost:8080"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --base-url");
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
  }

  #[test]
  fn test_verbosity_counts() {
    let args = make_args(&["1.1.1.1", "-vv"]);
    let cli = Cli::try_parse_from(args).expect("Should parse -vv");
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn test_config_flags_without_address() {
    let args = make_args(&["--config-show"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --config-show");
    assert!(cli.config_show);

    let args = make_args(&["--save-config", "--format", "csv"]);
    let cli = Cli::try_parse_from(args).expect("Should parse --save-config");
    assert!(cli.save_config);
  }

  #[test]
  fn test_save_and_show_conflict() {
    let args = make_args(&["--save-config", "--config-show"]);
    assert!(Cli::try_parse_from(args).is_err());
  }

  #[test]
  fn test_unknown_flag_fails() {
    let args = make_args(&["8.8.8.8", "--bogus"]);
    let result = Cli::try_parse_from(args);
    assert!(matches!(
      result.unwrap_err().kind(),
      clap::error::ErrorKind::UnknownArgument
    ));
  }
}

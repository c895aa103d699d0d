use crate::cli::Cli;
use crate::providers::geo::{GeoClient, DEFAULT_BASE_URL};
use crate::results::{self, OutputFormat};
use crate::steps;
use crate::user_config::{self, UserConfig};
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::Serialize;

/// Effective settings after merging flags/env, config file and defaults.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
  pub format: String,
  pub base_url: String,
}

impl Settings {
  /// Flag/env values win over the config file, which wins over defaults.
  pub fn resolve(cli: &Cli, config: &UserConfig) -> Self {
    let format = cli
      .format
      .clone()
      .or_else(|| config.format.clone())
      .unwrap_or_else(|| OutputFormat::default().to_string());
    let base_url = cli
      .base_url
      .clone()
      .or_else(|| config.base_url.clone())
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    Self { format, base_url }
  }
}

pub struct App {
  cli: Cli,
  config: UserConfig,
  settings: Settings,
}

impl App {
  pub fn new(cli: Cli, config: UserConfig) -> Self {
    let settings = Settings::resolve(&cli, &config);
    debug!("Resolved settings: {settings:?}");
    Self {
      cli,
      config,
      settings,
    }
  }

  pub async fn run(&self) -> Result<()> {
    if self.cli.config_show {
      return self.show_config();
    }
    if self.cli.save_config {
      return self.save_config();
    }

    let (address, format) =
      steps::validate_step(self.cli.address.as_deref(), &self.settings.format)?;

    let http = Client::builder()
      .user_agent(format!("ipgeo/{}", env!("CARGO_PKG_VERSION")))
      .build()
      .context("Failed to build HTTP client")?;
    let client = GeoClient::new(http, &self.settings.base_url);

    let result = steps::lookup_step(&client, &address).await;
    print!("{}", results::render(&result, format));
    Ok(())
  }

  fn show_config(&self) -> Result<()> {
    serde_json::to_string_pretty(&self.settings)
      .map(|s| println!("{s}"))
      .context("Failed to serialize settings to JSON")
  }

  fn save_config(&self) -> Result<()> {
    if let Some(format) = &self.cli.format {
      format.parse::<OutputFormat>()?;
    }
    let updated = UserConfig {
      format: self.cli.format.clone().or_else(|| self.config.format.clone()),
      base_url: self
        .cli
        .base_url
        .clone()
        .or_else(|| self.config.base_url.clone()),
    };
    user_config::store(&updated).context("Failed to save config file")?;
    match user_config::path() {
      Ok(path) => println!("Configuration saved to {}", path.display()),
      Err(_) => println!("Configuration saved"),
    }
    Ok(())
  }
}

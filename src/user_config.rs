use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "ipgeo";
const FILE_NAME: Option<&str> = None;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct UserConfig {
  pub format: Option<String>,
  pub base_url: Option<String>,
}

/// Read ~/.config/ipgeo/default-config.toml (or OS equivalent).
///
/// A missing file yields the defaults and is not created; only
/// [`store`] writes to the config directory.
pub fn load() -> UserConfig {
  let path = match path() {
    Ok(path) => path,
    Err(e) => {
      warn!("Ignoring config file: {e}");
      return UserConfig::default();
    }
  };
  if !path.is_file() {
    return UserConfig::default();
  }
  confy::load_path(&path).unwrap_or_else(|e| {
    warn!("Ignoring unreadable config file {}: {e}", path.display());
    UserConfig::default()
  })
}

pub fn store(cfg: &UserConfig) -> anyhow::Result<()> {
  confy::store(APP_NAME, FILE_NAME, cfg).map_err(Into::into)
}

pub fn path() -> anyhow::Result<PathBuf> {
  confy::get_configuration_file_path(APP_NAME, FILE_NAME).map_err(Into::into)
}

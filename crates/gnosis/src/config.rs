//! Configuration for fetching pages and locating the catalog.
//!
//! Configuration lives in a TOML file, by default in the platform config
//! directory (`~/.config/gnosis/config.toml` on Linux). Every field has a
//! default, so a partial file is valid.
//!
//! ```toml
//! database_path = "/home/me/.local/share/gnosis/gnosis.db"
//! batch_concurrency = 4
//!
//! [fetch]
//! timeout_secs = 20
//! ```

use super::*;

/// Default timeout for a single page request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Browser identifier sent to sites that block non-browser clients.
pub const DEFAULT_BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                              (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Location of the catalog database
  pub database_path:     PathBuf,
  /// Page request settings
  pub fetch:             FetchConfig,
  /// Maximum number of pages fetched at once during batch imports
  pub batch_concurrency: usize,
}

/// Settings for page requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
  /// Request timeout in seconds
  pub timeout_secs:       u64,
  /// Identifier sent to sites that accept any client
  pub user_agent:         String,
  /// Identifier sent to sites that only answer browsers
  pub browser_user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_path:     database::Database::default_path(),
      fetch:             FetchConfig::default(),
      batch_concurrency: 4,
    }
  }
}

impl Default for FetchConfig {
  fn default() -> Self {
    Self {
      timeout_secs:       DEFAULT_TIMEOUT_SECS,
      user_agent:         concat!("gnosis/", env!("CARGO_PKG_VERSION")).to_string(),
      browser_user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
    }
  }
}

impl FetchConfig {
  /// The request timeout as a [`Duration`].
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

impl Config {
  /// Returns the default path of the configuration file.
  ///
  /// - On Unix: `~/.config/gnosis/config.toml`
  /// - On macOS: `~/Library/Application Support/gnosis/config.toml`
  /// - On Windows: `%APPDATA%\gnosis\config.toml`
  /// - Fallback: `./gnosis/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("gnosis").join("config.toml")
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&content)?;
    debug!("Loaded configuration from {}", path.as_ref().display());
    Ok(config)
  }

  /// Reads a configuration file, or returns the defaults if it does not exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    if path.as_ref().exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.as_ref().display());
      Ok(Self::default())
    }
  }

  /// Writes this configuration, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    Ok(())
  }

  /// Sets the catalog database location.
  pub fn with_database_path(mut self, path: impl AsRef<Path>) -> Self {
    self.database_path = path.as_ref().to_path_buf();
    self
  }

  /// Sets the request timeout.
  pub fn with_timeout_secs(mut self, secs: u64) -> Self {
    self.fetch.timeout_secs = secs;
    self
  }

  /// Sets the batch import concurrency. Values below one are raised to one.
  pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
    self.batch_concurrency = concurrency.max(1);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_path() {
    let path = Config::default_path();
    assert!(path.ends_with("gnosis/config.toml") || path.ends_with("gnosis\\config.toml"));
  }

  #[traced_test]
  #[test]
  fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config::default()
      .with_database_path(dir.path().join("gnosis.db"))
      .with_timeout_secs(5)
      .with_batch_concurrency(0);

    config.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.batch_concurrency, 1);
    assert_eq!(loaded.fetch.timeout(), Duration::from_secs(5));
  }

  #[test]
  fn test_partial_file_uses_defaults() {
    let config: Config = toml::from_str("batch_concurrency = 8\n[fetch]\ntimeout_secs = 3\n").unwrap();
    assert_eq!(config.batch_concurrency, 8);
    assert_eq!(config.fetch.timeout_secs, 3);
    assert_eq!(config.fetch.browser_user_agent, DEFAULT_BROWSER_USER_AGENT);
    assert_eq!(config.database_path, database::Database::default_path());
  }

  #[test]
  fn test_load_or_default_missing_file() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
  }
}

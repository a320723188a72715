//! Error types for the gnosis library.
//!
//! Failures fall into a few groups:
//! - The input URL is not from a supported site
//! - The page could not be retrieved
//! - The page was retrieved but did not describe a paper
//! - Catalog storage and configuration failures
//!
//! # Examples
//!
//! ```no_run
//! use gnosis::{extract::Extractor, prelude::*};
//!
//! # async fn example() -> Result<(), GnosisError> {
//! match Extractor::new()?.extract("https://example.com/paper").await {
//!   Err(GnosisError::UnsupportedSite(url)) => println!("No extractor for {url}"),
//!   Err(GnosisError::Fetch(e)) => println!("Fetch failed: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(extraction) => println!("{:?}", extraction.result),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`gnosis`](crate) crate.
pub type Result<T> = core::result::Result<T, GnosisError>;

/// Message shown to a user when a URL is not from a supported site.
pub const UNSUPPORTED_SITE_MESSAGE: &str = "Source website is not supported";

/// Message shown to a user when a page could not be turned into a paper.
///
/// Fetch failures and pages missing required fields are reported the same way.
pub const INVALID_SOURCE_MESSAGE: &str = "Invalid source, please try again.";

/// Errors that can occur when importing and cataloguing papers.
#[derive(Error, Debug)]
pub enum GnosisError {
  /// The URL does not match any supported hosting site.
  ///
  /// Carries the URL as given. No request is made for such URLs.
  #[error("Source website is not supported: {0}")]
  UnsupportedSite(String),

  /// The page could not be retrieved.
  #[error(transparent)]
  Fetch(#[from] FetchError),

  /// A fetched page is missing one or more of title, authors and abstract.
  #[error("Page is missing required fields: {}", .missing.join(", "))]
  PartialExtraction {
    /// Names of the missing fields
    missing: Vec<&'static str>,
  },

  /// An attempt to add a paper whose title is already in the catalog.
  #[error("Tried to add a paper titled \"{0}\" that was already in the catalog.")]
  DuplicatePaper(String),

  /// A SQLite operation failed.
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The HTTP client could not be constructed.
  #[error("Failed to build HTTP client: {0}")]
  Client(reqwest::Error),

  /// Configuration is missing or invalid.
  #[error("{0}")]
  Config(String),
}

impl GnosisError {
  /// The message an end user sees for this error.
  ///
  /// Fetch failures and partial extractions share one message, everything else
  /// uses the error's own display text.
  pub fn user_message(&self) -> String {
    match self {
      GnosisError::UnsupportedSite(_) => UNSUPPORTED_SITE_MESSAGE.to_string(),
      GnosisError::Fetch(_) | GnosisError::PartialExtraction { .. } =>
        INVALID_SOURCE_MESSAGE.to_string(),
      e => e.to_string(),
    }
  }
}

/// The broad reason a page fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
  /// The server answered with a non-success status
  Http,
  /// The server could not be reached
  Network,
}

impl std::fmt::Display for FetchErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FetchErrorKind::Http => write!(f, "http"),
      FetchErrorKind::Network => write!(f, "network"),
    }
  }
}

/// Failure to retrieve a paper page. Never retried by this crate.
#[derive(Error, Debug)]
pub enum FetchError {
  /// The server returned a non-2xx status.
  #[error("fetch failed, reason=http: {url} returned status {status}")]
  Http {
    /// Requested URL
    url:    String,
    /// Status code returned by the server
    status: u16,
  },

  /// DNS, connection, TLS or timeout failure.
  #[error("fetch failed, reason=network: {url}: {source}")]
  Network {
    /// Requested URL
    url:    String,
    /// Underlying client error
    source: reqwest::Error,
  },
}

impl FetchError {
  /// Which half of the failure taxonomy this error belongs to.
  pub fn kind(&self) -> FetchErrorKind {
    match self {
      FetchError::Http { .. } => FetchErrorKind::Http,
      FetchError::Network { .. } => FetchErrorKind::Network,
    }
  }
}

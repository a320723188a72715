//! Error types for the gnosis command line.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, GnosisdError>;

/// Errors that can end a CLI command.
#[derive(Error, Debug)]
pub enum GnosisdError {
  /// Any failure from the library.
  #[error(transparent)]
  Gnosis(#[from] GnosisError),

  /// A prompt could not be shown or answered.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// No catalog paper has the requested id.
  #[error("No paper with id {0} in the catalog")]
  PaperNotFound(i64),

  /// Some URLs of a batch could not be imported.
  #[error("{failed} of {total} URLs could not be imported")]
  BatchFailures {
    /// URLs that failed
    failed: usize,
    /// URLs in the batch
    total:  usize,
  },
}

impl GnosisdError {
  /// The message shown to the user for this error.
  pub fn user_message(&self) -> String {
    match self {
      GnosisdError::Gnosis(e) => e.user_message(),
      e => e.to_string(),
    }
  }
}

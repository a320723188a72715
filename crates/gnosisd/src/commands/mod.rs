//! Subcommands of the `gnosis` binary.

use super::*;

pub mod batch;
pub mod import;
pub mod init;
pub mod search;
pub mod show;

pub use batch::{batch, BatchArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use search::{search, SearchArgs};
pub use show::{show, ShowArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a configuration file and create the paper catalog
  Init(InitArgs),

  /// Extract a paper from the URL of its page and optionally save it
  Import(ImportArgs),

  /// Extract every paper listed in a file, one URL per line
  Batch(BatchArgs),

  /// Search catalog titles by keyword
  Search(SearchArgs),

  /// Show a catalog paper and its authors
  Show(ShowArgs),
}

/// Adds a draft to the catalog, reporting a duplicate as a warning.
///
/// Returns the new paper's id, or `None` if the title was already catalogued.
async fn save_draft<I: UserInteraction>(
  interaction: &I,
  db: &Database,
  draft: &PaperDraft,
) -> Result<Option<i64>> {
  match db.add_paper(draft).await {
    Ok(id) => Ok(Some(id)),
    Err(GnosisError::DuplicatePaper(title)) => {
      interaction
        .reply(ResponseContent::Warning(&format!("\"{title}\" is already in the catalog")))?;
      Ok(None)
    },
    Err(e) => Err(e.into()),
  }
}

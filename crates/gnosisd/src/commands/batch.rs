//! Module for importing every paper listed in a file.

use super::*;

/// Arguments for [`Commands::Batch`].
#[derive(Args, Clone)]
pub struct BatchArgs {
  /// File with one URL per line. Blank lines and lines starting with `#` are skipped.
  pub file: PathBuf,

  /// Save every complete extraction to the catalog
  #[arg(long)]
  pub save: bool,
}

/// The URLs listed in a batch file, in order.
pub fn parse_url_list(contents: &str) -> Vec<&str> {
  contents
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'))
    .collect()
}

/// Function for the [`Commands::Batch`] in the CLI.
///
/// Pages are fetched concurrently. Every URL gets a status line; the command fails
/// if any URL could not be imported.
pub async fn batch<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  batch_args: BatchArgs,
) -> Result<()> {
  let BatchArgs { file, save } = batch_args;

  let contents = tokio::fs::read_to_string(&file).await?;
  let urls = parse_url_list(&contents);
  if urls.is_empty() {
    interaction.reply(ResponseContent::Info(&format!("No URLs listed in {}", file.display())))?;
    return Ok(());
  }

  let extractor = Extractor::from_config(config)?;
  interaction.reply(ResponseContent::Info(&format!(
    "Fetching {} papers, {} at a time",
    urls.len(),
    config.batch_concurrency
  )))?;
  let results = extractor.extract_many(&urls).await;

  let db = if save { Some(Database::open(&config.database_path).await?) } else { None };
  let mut imported = 0;
  for (url, result) in urls.iter().zip(results) {
    let draft = match result.and_then(PaperDraft::from_extraction) {
      Ok(draft) => draft,
      Err(e) => {
        debug!("Batch import of {url} failed: {e}");
        interaction.reply(ResponseContent::Warning(&format!("{url}: {}", e.user_message())))?;
        continue;
      },
    };

    let saved = match &db {
      Some(db) => save_draft(interaction, db, &draft).await?.map(|id| format!(" (paper {id})")),
      None => None,
    };
    interaction
      .reply(ResponseContent::Success(&format!("{url}: {}{}", draft.title, saved.unwrap_or_default())))?;
    imported += 1;
  }

  interaction.reply(ResponseContent::Info(&format!("Imported {imported} of {} URLs", urls.len())))?;
  if imported < urls.len() {
    return Err(GnosisdError::BatchFailures { failed: urls.len() - imported, total: urls.len() });
  }
  Ok(())
}

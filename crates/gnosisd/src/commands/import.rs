//! Module for importing a single paper.

use super::*;

/// Arguments for [`Commands::Import`].
#[derive(Args, Clone)]
pub struct ImportArgs {
  /// URL of the paper page, e.g. "https://arxiv.org/abs/1706.03762"
  pub url: String,

  /// Save to the catalog without asking
  #[arg(long, group = "save_behavior")]
  pub save: bool,

  /// Only print the extracted fields
  #[arg(long, group = "save_behavior")]
  pub no_save: bool,
}

/// Function for the [`Commands::Import`] in the CLI.
pub async fn import<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  import_args: ImportArgs,
) -> Result<()> {
  let ImportArgs { url, save, no_save } = import_args;

  let extractor = Extractor::from_config(config)?;
  interaction.reply(ResponseContent::Info(&format!("Fetching paper: {url}")))?;
  let extraction = extractor.extract(&url).await?;
  interaction.reply(ResponseContent::Extraction(&extraction))?;

  let draft = PaperDraft::from_extraction(extraction)?;

  let should_save = if save {
    true
  } else if no_save {
    false
  } else {
    interaction.confirm("Save this paper to the catalog?")?
  };
  if !should_save {
    return Ok(());
  }

  let db = Database::open(&config.database_path).await?;
  if let Some(id) = save_draft(interaction, &db, &draft).await? {
    interaction.reply(ResponseContent::Success(&format!("Saved as paper {id}")))?;
  }
  Ok(())
}

//! Module for showing one catalog paper.

use super::*;

/// Arguments for [`Commands::Show`].
#[derive(Args, Clone)]
pub struct ShowArgs {
  /// Catalog id of the paper, as listed by `search`
  pub id: i64,
}

/// Function for the [`Commands::Show`] in the CLI.
pub async fn show<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  show_args: ShowArgs,
) -> Result<()> {
  let db = Database::open(&config.database_path).await?;
  let paper = db.get_paper(show_args.id).await?.ok_or(GnosisdError::PaperNotFound(show_args.id))?;
  let authors = db.authors_of(paper.id).await?;
  interaction.reply(ResponseContent::Paper(&paper, &authors))
}

//! Module for searching the catalog.

use super::*;

/// Arguments for [`Commands::Search`].
#[derive(Args, Clone)]
pub struct SearchArgs {
  /// Keywords matched against titles, ignoring case. Lists every paper when empty.
  pub keywords: Vec<String>,
}

/// Function for the [`Commands::Search`] in the CLI.
pub async fn search<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  search_args: SearchArgs,
) -> Result<()> {
  let query = search_args.keywords.join(" ");
  let db = Database::open(&config.database_path).await?;
  let papers = db.search(&query).await?;

  if papers.is_empty() {
    interaction.reply(ResponseContent::Info("No papers found"))
  } else {
    interaction.reply(ResponseContent::Papers(&papers))
  }
}

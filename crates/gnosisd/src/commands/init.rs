//! Module for setting up a configuration and catalog.

use super::*;

/// Arguments for [`Commands::Init`].
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Where to create the catalog database. Defaults to the platform data directory.
  #[arg(long)]
  pub db_path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
pub async fn init<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  init_args: InitArgs,
) -> Result<()> {
  let InitArgs { db_path } = init_args;

  if config_path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      config_path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info(
      "Keeping the existing configuration. Pass a different location with --config",
    ))?;
    return Ok(());
  }

  let config = Config::default().with_database_path(db_path.unwrap_or_else(Database::default_path));
  config.save(config_path)?;
  Database::open(&config.database_path).await?;

  interaction.reply(ResponseContent::Success(&format!(
    "Created gnosis configuration with\nConfig path: {}\nDatabase path: {}",
    config_path.display(),
    config.database_path.display(),
  )))?;
  Ok(())
}

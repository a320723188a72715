//! Everything the CLI shows to, and asks of, the user.

use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for a field of a listed item
pub static ITEM_PREFIX: &str = "├─";
/// Prefix for the last field of a listed item
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Shown for a field that could not be extracted.
static NOT_FOUND: &str = "(not found)";

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Fields extracted from a page
  Extraction(&'a Extraction),
  /// A catalog paper with its linked authors
  Paper(&'a StoredPaper, &'a [PersonName]),
  /// A list of catalog papers
  Papers(&'a [StoredPaper]),
  /// An operation completed
  Success(&'a str),
  /// Something worth knowing that is not a failure
  Warning(&'a str),
  /// A failure
  Error(&'a GnosisdError),
  /// Progress and other information
  Info(&'a str),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;

  /// Shows something to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction through the terminal.
pub struct Terminal {
  /// Answer every question with its default instead of prompting
  accept_defaults: bool,
}

impl Terminal {
  /// Creates a terminal interaction.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

/// Prints one `label: value` line of a listed item.
fn field(label: &str, value: &str, last: bool) {
  let prefix = if last { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
  println!("{} {}: {}", style(prefix).dim(), style(label).bold(), value);
}

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(Confirm::new().with_prompt(message).default(true).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Extraction(extraction) => {
        let result = &extraction.result;
        println!(
          "{} {} page {}",
          style(INFO_PREFIX).blue(),
          style(extraction.site()).cyan(),
          style(extraction.url()).dim()
        );
        field("Title", result.title.as_deref().unwrap_or(NOT_FOUND), false);
        field("Authors", result.authors.as_deref().unwrap_or(NOT_FOUND), false);
        field("Abstract", result.abstract_text.as_deref().unwrap_or(NOT_FOUND), false);
        field("PDF", result.download_link.as_deref().unwrap_or(NOT_FOUND), true);
      },
      ResponseContent::Paper(paper, authors) => {
        println!("{} [{}] {}", style(INFO_PREFIX).blue(), paper.id, style(&paper.title).bold());
        let authors = authors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        field("Authors", if authors.is_empty() { NOT_FOUND } else { authors.as_str() }, false);
        field("Abstract", &paper.abstract_text, false);
        field("PDF", &paper.download_link, false);
        field("Source", &paper.source_link, false);
        field("Added", &paper.created_at.format("%Y-%m-%d").to_string(), true);
      },
      ResponseContent::Papers(papers) => {
        println!("{} Found {} papers:", style(INFO_PREFIX).blue(), papers.len());
        for paper in papers {
          let site = paper.source_site.map(|site| site.to_string()).unwrap_or_default();
          println!("  {} {} {}", style(format!("[{}]", paper.id)).dim(), paper.title, style(site).cyan());
        }
      },
      ResponseContent::Success(message) => println!("{} {}", style(SUCCESS_PREFIX).green(), message),
      ResponseContent::Warning(message) =>
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(e) =>
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e.user_message()).red()),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).blue(), message),
    }
    Ok(())
  }
}

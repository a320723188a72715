//! JMLR paper pages (`jmlr.org/papers/...`).

use url::Url;

use super::*;

/// Host prefix for the root-relative PDF links JMLR uses.
const JMLR_ROOT: &str = "http://www.jmlr.org";

/// Extractor for JMLR.
pub(crate) struct Jmlr;

impl PaperExtractor for Jmlr {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_of_many(&page.document, "h2", "title").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let authors = first_text(&page.document, "i")?;
    non_empty(&authors.replace("(Corresponding author)", ""))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    if let Some(text) = first_text(&page.document, "p.abstract") {
      return Some(text);
    }
    // Older pages put the abstract as bare text after the "Abstract" heading
    select_first(&page.document, "h3").and_then(following_text)
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    let href = select(&page.document, "[href*=pdf]")
      .into_iter()
      .find_map(|element| element.value().attr("href"))?;

    if href.starts_with("/papers/") {
      return Some(format!("{JMLR_ROOT}{href}"));
    }
    match Url::parse(href) {
      Ok(url) => Some(url.to_string()),
      Err(_) => Url::parse(page.base_url()).and_then(|base| base.join(href)).ok().map(String::from),
    }
  }
}

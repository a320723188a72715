//! PMLR proceedings pages (`proceedings.mlr.press/v.../*.html`).

use super::*;

/// Extractor for PMLR.
pub(crate) struct Pmlr;

impl PaperExtractor for Pmlr {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "title").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let raw = first_text(&page.document, "div#authors")?.replace(['\r', '\n', ';'], "");
    let authors = raw.split(',').map(str::trim).collect::<Vec<_>>().join(",");
    non_empty(&authors)
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "div#abstract")
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    select(&page.document, "a")
      .into_iter()
      .find(|anchor| text_of(*anchor) == "Download PDF")
      .and_then(|anchor| anchor.value().attr("href"))
      .map(str::to_string)
  }
}

//! NeurIPS proceedings pages (`papers.nips.cc/paper/...`).

use super::*;

/// Extractor for NeurIPS.
pub(crate) struct NeurIps;

impl PaperExtractor for NeurIps {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_of_many(&page.document, "title", "title").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let authors: Vec<String> =
      select(&page.document, "li.author").into_iter().map(text_of).collect();
    (!authors.is_empty()).then(|| authors.join(","))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "p.abstract")
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    Some(format!("{}.pdf", page.base_url()))
  }
}

//! arXiv abstract pages (`arxiv.org/abs/...`).

use super::*;

/// Extractor for arXiv.
pub(crate) struct Arxiv;

impl PaperExtractor for Arxiv {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_of_many(&page.document, "h1.title", "title").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let authors = first_of_many(&page.document, "div.authors", "authors")?;
    let authors = authors.trim();
    non_empty(authors.strip_prefix("Authors:").unwrap_or(authors))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    let quote = select_first(&page.document, "blockquote.abstract")?;

    // Leave out the `<span class="descriptor">Abstract:</span>` label
    let text: String = quote
      .children()
      .filter_map(|node| match node.value().as_text() {
        Some(text) => Some(text.to_string()),
        None => ElementRef::wrap(node)
          .filter(|element| !element.value().classes().any(|class| class == "descriptor"))
          .map(text_of),
      })
      .collect();

    let text = text.trim_start();
    Some(text.strip_prefix("Abstract:").unwrap_or(text).to_string())
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    Some(page.base_url().replacen("/abs/", "/pdf/", 1))
  }
}

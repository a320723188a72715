//! Robotics: Science and Systems pages (`roboticsproceedings.org/rss.../*.html`).

use super::*;

/// Extractor for the robotics proceedings.
pub(crate) struct Robotics;

impl PaperExtractor for Robotics {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "h3").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "i").and_then(|authors| non_empty(&authors))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    lazy_static! {
      // The first paragraph reads "Abstract: ... Download: ..."
      static ref BETWEEN_LABELS: Regex = Regex::new(r"(?s)Abstract:(.*?)Download:").unwrap();
    }

    let paragraph = select_first(&page.document, "p")?;
    let text = text_of(paragraph);
    match BETWEEN_LABELS.captures(&text).and_then(|captures| captures.get(1)) {
      Some(abstract_text) if !abstract_text.as_str().is_empty() =>
        Some(abstract_text.as_str().to_string()),
      _ => following_text(paragraph),
    }
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> { html_to_pdf(page.base_url()) }
}

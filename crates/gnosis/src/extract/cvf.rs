//! CVF open access pages (`openaccess.thecvf.com/content_.../*paper.html`).

use super::*;

/// Extractor for CVF.
pub(crate) struct Cvf;

impl PaperExtractor for Cvf {
  fn extract_title(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "div#papertitle").and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let authors = select_first(&page.document, "div#authors")?;
    let bold = select_within(authors, "b").into_iter().next()?;
    non_empty(&text_of(bold))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "div#abstract")
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    html_to_pdf(&page.base_url().replacen("/html/", "/papers/", 1))
  }
}

//! ACM Digital Library pages (`dl.acm.org/doi/...`).

use super::*;

/// `dc.Type` values of landing pages that are not a single paper.
const NON_PAPER_TYPES: [&str; 3] = ["book", "magazine", "proceeding"];

/// Extractor for the ACM Digital Library.
pub(crate) struct Acm;

impl PaperExtractor for Acm {
  fn is_paper_page(&self, page: &Page) -> bool {
    let sells_book = select(&page.document, "a")
      .into_iter()
      .any(|anchor| text_of(anchor).to_lowercase().contains("buy this book"));
    if sells_book {
      return false;
    }

    match meta_content(&page.document, "dc.Type") {
      Some(kind) => {
        let kind = kind.to_lowercase();
        !NON_PAPER_TYPES.iter().any(|non_paper| kind.contains(non_paper))
      },
      None => true,
    }
  }

  fn extract_title(&self, page: &Page) -> Option<String> {
    meta_content(&page.document, "dc.Title")
      .or_else(|| first_text(&page.document, "h1.citation__title"))
      .and_then(|title| clean_title(&title))
  }

  fn extract_authors(&self, page: &Page) -> Option<String> {
    let names: Vec<String> = meta_contents(&page.document, "dc.Creator")
      .iter()
      .filter_map(|name| non_empty(name))
      .collect();
    (!names.is_empty()).then(|| names.join(", "))
  }

  fn extract_abstract(&self, page: &Page) -> Option<String> {
    first_text(&page.document, "div.abstractSection")
      .and_then(|text| non_empty(&text))
      .or_else(|| meta_content(&page.document, "dc.Description"))
  }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    meta_content(&page.document, "citation_pdf_url").and_then(|link| non_empty(&link))
  }
}

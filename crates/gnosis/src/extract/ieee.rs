//! IEEE Xplore document pages (`ieeexplore.ieee.org/document/...`).
//!
//! Xplore renders its pages client-side; the metadata is embedded in a script as
//! `xplGlobal.document.metadata = {...};`, so every field is read from that JSON.

use super::*;

/// Host prefix for the `pdfPath` in the embedded metadata.
const IEEE_ROOT: &str = "https://ieeexplore.ieee.org";

/// Marker preceding the metadata object in the page script.
const METADATA_MARKER: &str = "xplGlobal.document.metadata";

/// Content types that are listings or non-paper documents.
const NON_PAPER_TYPES: [&str; 4] = ["books", "standards", "courses", "ebooks"];

/// The part of the embedded document metadata we use.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Metadata {
  /// Document title
  title:         Option<String>,
  /// Authors in page order
  authors:       Vec<MetadataAuthor>,
  /// Abstract text
  #[serde(rename = "abstract")]
  abstract_text: Option<String>,
  /// Root-relative link to the PDF viewer
  pdf_path:      Option<String>,
  /// Kind of publication, e.g. "conferences" or "periodicals"
  content_type:  Option<String>,
  /// Set on book landing pages
  is_book:       Option<bool>,
}

/// An author entry of the embedded metadata.
#[derive(Debug, Deserialize)]
struct MetadataAuthor {
  /// Full name
  #[serde(default)]
  name: String,
}

/// Extractor for IEEE Xplore.
pub(crate) struct Ieee;

impl Ieee {
  /// Finds and parses the embedded metadata object.
  fn metadata(page: &Page) -> Option<Metadata> {
    let script = select(&page.document, "script")
      .into_iter()
      .map(text_of)
      .find(|script| script.contains(METADATA_MARKER))?;

    let after_marker = &script[script.find(METADATA_MARKER)? + METADATA_MARKER.len()..];
    let object = &after_marker[after_marker.find('{')?..];

    // Only the first JSON value matters, the rest of the script follows it
    serde_json::Deserializer::from_str(object)
      .into_iter::<Metadata>()
      .next()?
      .map_err(|e| warn!("Unreadable IEEE metadata on {}: {e}", page.url))
      .ok()
  }
}

impl Metadata {
  /// Whether the document is a single paper rather than a book, standard or course.
  fn describes_paper(&self) -> bool {
    if self.is_book == Some(true) {
      return false;
    }
    match &self.content_type {
      Some(content_type) => !NON_PAPER_TYPES.contains(&content_type.to_lowercase().as_str()),
      None => false,
    }
  }

  /// Cleaned title.
  fn title(&self) -> Option<String> { self.title.as_deref().and_then(clean_title) }

  /// Non-empty author names joined with `, `.
  fn authors(&self) -> Option<String> {
    let names: Vec<&str> =
      self.authors.iter().map(|author| author.name.trim()).filter(|name| !name.is_empty()).collect();
    (!names.is_empty()).then(|| names.join(", "))
  }

  /// Absolute PDF viewer URL.
  fn download_link(&self) -> Option<String> {
    self.pdf_path.as_ref().map(|pdf_path| format!("{IEEE_ROOT}{pdf_path}"))
  }
}

impl PaperExtractor for Ieee {
  fn is_paper_page(&self, page: &Page) -> bool {
    Self::metadata(page).is_some_and(|metadata| metadata.describes_paper())
  }

  fn extract_title(&self, page: &Page) -> Option<String> { Self::metadata(page)?.title() }

  fn extract_authors(&self, page: &Page) -> Option<String> { Self::metadata(page)?.authors() }

  fn extract_abstract(&self, page: &Page) -> Option<String> { Self::metadata(page)?.abstract_text }

  fn extract_download_link(&self, page: &Page) -> Option<String> {
    Self::metadata(page)?.download_link()
  }

  fn extract_page(&self, site: SourceSite, page: &Page) -> ExtractionResult {
    let Some(metadata) = Self::metadata(page).filter(Metadata::describes_paper) else {
      return not_a_paper(site, page);
    };
    assemble(
      site,
      page,
      metadata.title(),
      metadata.authors(),
      metadata.abstract_text.clone(),
      || metadata.download_link(),
    )
  }
}

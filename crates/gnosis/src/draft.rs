//! The hand-off from an extraction to a new catalog entry.
//!
//! An [`Extraction`](crate::extract::Extraction) is turned into a [`PaperDraft`]
//! and passed on by value, typically shown to a user for confirmation and then
//! given to [`Database::add_paper`](crate::database::Database::add_paper).

use super::*;
use crate::{extract::Extraction, person::split_authors};

/// What a missing download tag stringifies to on some pages.
const MISSING_LINK_ARTIFACT: &str = "Non";

/// A paper ready to be added to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDraft {
  /// Paper title
  pub title:         String,
  /// Single-paragraph abstract
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  /// Full author names, first author first
  pub authors:       Vec<String>,
  /// PDF location, or the page itself when no PDF link was found
  pub download_link: String,
  /// The page the paper was imported from
  pub source_link:   String,
  /// The site the paper was imported from
  pub source_site:   Option<SourceSite>,
}

impl PaperDraft {
  /// Builds a draft from an extraction.
  ///
  /// # Errors
  ///
  /// Returns [`GnosisError::PartialExtraction`] naming the missing fields when the
  /// page lacked a title, authors or abstract.
  ///
  /// # Examples
  ///
  /// ```
  /// use gnosis::{
  ///   draft::PaperDraft,
  ///   extract::{Extraction, ExtractionResult},
  ///   site::classify,
  /// };
  ///
  /// let extraction = Extraction {
  ///   page:   classify("https://arxiv.org/abs/1234.5678").unwrap(),
  ///   result: ExtractionResult {
  ///     title:         Some("A Paper".into()),
  ///     authors:       Some("Ada Lovelace, Alan Turing".into()),
  ///     abstract_text: Some("Text.".into()),
  ///     download_link: None,
  ///   },
  /// };
  /// let draft = PaperDraft::from_extraction(extraction).unwrap();
  /// assert_eq!(draft.authors, ["Ada Lovelace", "Alan Turing"]);
  /// assert_eq!(draft.download_link, "https://arxiv.org/abs/1234.5678");
  /// ```
  pub fn from_extraction(extraction: Extraction) -> Result<Self> {
    let Extraction { page, result } = extraction;
    let missing = result.missing_fields();
    let (Some(title), Some(authors), Some(abstract_text)) =
      (result.title, result.authors, result.abstract_text)
    else {
      return Err(GnosisError::PartialExtraction { missing });
    };

    let download_link = match result.download_link {
      Some(link) if !link.trim().is_empty() && link != MISSING_LINK_ARTIFACT => link,
      _ => {
        debug!("No download link for {}, using the page URL", page.url);
        page.url.clone()
      },
    };

    Ok(Self {
      title,
      abstract_text,
      authors: split_authors(&authors),
      download_link,
      source_link: page.url,
      source_site: Some(page.site),
    })
  }

  /// The authors joined back into one comma-separated string.
  pub fn authors_string(&self) -> String { self.authors.join(", ") }
}

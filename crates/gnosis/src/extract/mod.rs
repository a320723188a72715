//! Per-site paper metadata extraction.
//!
//! Extraction runs in a fixed sequence:
//!
//! 1. Classify the URL ([`classify`]); unsupported URLs are rejected without a request
//! 2. Fetch the page through a [`PageFetcher`]; failures are returned as-is
//! 3. Parse the HTML and run the site's page guard
//! 4. Extract title, authors and abstract independently
//! 5. Derive the download link, but only when all three were found
//!
//! Each supported [`SourceSite`] has one [`PaperExtractor`] implementation. A
//! lookup that finds nothing yields `None` for that field and never aborts the
//! others.
//!
//! # Examples
//!
//! ```no_run
//! use gnosis::extract::Extractor;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new()?;
//! let extraction = extractor.extract("https://arxiv.org/abs/1706.03762").await?;
//!
//! if extraction.result.is_complete() {
//!   println!("{}", extraction.result.title.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use futures::{stream, StreamExt};

use super::*;
use crate::{
  config::Config,
  fetch::{HttpFetcher, PageFetcher},
};

mod acm;
mod arxiv;
mod cvf;
pub(crate) mod dom;
mod ieee;
mod jmlr;
mod neurips;
mod pmlr;
mod robotics;

pub use self::dom::clean_abstract;
use self::dom::*;

/// The fields extracted from a paper page.
///
/// Every field is independently optional. A page missing any of title, authors or
/// abstract is not treated as a paper page, and its download link is never derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
  /// Paper title
  pub title:         Option<String>,
  /// Comma-separated full author names, first to last author
  pub authors:       Option<String>,
  /// Single-paragraph abstract
  #[serde(rename = "abstract")]
  pub abstract_text: Option<String>,
  /// Absolute URL of the PDF
  pub download_link: Option<String>,
}

impl ExtractionResult {
  /// Whether title, authors and abstract were all found.
  pub fn is_complete(&self) -> bool { self.missing_fields().is_empty() }

  /// Names of the required fields that were not found.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.title.is_none() {
      missing.push("title");
    }
    if self.authors.is_none() {
      missing.push("authors");
    }
    if self.abstract_text.is_none() {
      missing.push("abstract");
    }
    missing
  }
}

/// The outcome of extracting one page: where it came from and what was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
  /// The classified, scheme-normalized page URL
  pub page:   ClassifiedUrl,
  /// Fields found on the page
  pub result: ExtractionResult,
}

impl Extraction {
  /// The site the page belongs to.
  pub fn site(&self) -> SourceSite { self.page.site }

  /// The normalized page URL.
  pub fn url(&self) -> &str { &self.page.url }
}

/// A parsed paper page.
pub struct Page {
  /// The URL the page was requested from
  pub url:      String,
  /// The parsed HTML document
  pub document: Html,
}

impl Page {
  /// Parses an HTML body fetched from `url`.
  pub fn parse(url: &str, html: &str) -> Self {
    Self { url: url.to_string(), document: Html::parse_document(html) }
  }

  /// The page URL without a trailing `/`, the base for derived download links.
  pub fn base_url(&self) -> &str { self.url.strip_suffix('/').unwrap_or(&self.url) }
}

/// Site-specific field lookups against a parsed page.
///
/// Implementations return `None` when a field cannot be found; they never fail.
pub trait PaperExtractor: Send + Sync {
  /// Finds the paper title.
  fn extract_title(&self, page: &Page) -> Option<String>;

  /// Finds the authors as one comma-separated string in page order.
  fn extract_authors(&self, page: &Page) -> Option<String>;

  /// Finds the raw abstract. Cleanup is applied by the caller.
  fn extract_abstract(&self, page: &Page) -> Option<String>;

  /// Derives the absolute PDF URL.
  fn extract_download_link(&self, page: &Page) -> Option<String>;

  /// Whether the page describes a single paper at all.
  ///
  /// Sites that serve book, magazine or listing pages under paper-like URLs
  /// override this; a page that fails the check yields no fields.
  fn is_paper_page(&self, _page: &Page) -> bool { true }

  /// Runs the page guard and every lookup, then cleans the result.
  ///
  /// Sites whose fields all come from one parsed source override this so the
  /// source is read once per page.
  fn extract_page(&self, site: SourceSite, page: &Page) -> ExtractionResult {
    if !self.is_paper_page(page) {
      return not_a_paper(site, page);
    }
    assemble(
      site,
      page,
      self.extract_title(page),
      self.extract_authors(page),
      self.extract_abstract(page),
      || self.extract_download_link(page),
    )
  }
}

/// The empty result for a page that fails its site's guard.
pub(crate) fn not_a_paper(site: SourceSite, page: &Page) -> ExtractionResult {
  warn!("{site} page at {} does not describe a paper", page.url);
  ExtractionResult::default()
}

/// Cleans the looked-up fields and derives the download link only when title,
/// authors and abstract are all present.
pub(crate) fn assemble(
  site: SourceSite,
  page: &Page,
  title: Option<String>,
  authors: Option<String>,
  raw_abstract: Option<String>,
  download_link: impl FnOnce() -> Option<String>,
) -> ExtractionResult {
  let abstract_text = raw_abstract.and_then(|raw| clean_abstract(site, &raw));
  let mut result = ExtractionResult { title, authors, abstract_text, download_link: None };
  if result.is_complete() {
    result.download_link = download_link();
  } else {
    debug!("Missing {:?} on {}, not deriving a download link", result.missing_fields(), page.url);
  }
  result
}

impl SourceSite {
  /// The extractor implementing this site's lookups.
  pub fn extractor(&self) -> &'static dyn PaperExtractor {
    match self {
      SourceSite::Arxiv => &arxiv::Arxiv,
      SourceSite::NeurIps => &neurips::NeurIps,
      SourceSite::Jmlr => &jmlr::Jmlr,
      SourceSite::Pmlr => &pmlr::Pmlr,
      SourceSite::Cvf => &cvf::Cvf,
      SourceSite::Robotics => &robotics::Robotics,
      SourceSite::Ieee => &ieee::Ieee,
      SourceSite::Acm => &acm::Acm,
    }
  }
}

/// Runs the site's extractor over an already fetched page body.
pub fn extract_fields(page: &ClassifiedUrl, html: &str) -> ExtractionResult {
  let parsed = Page::parse(&page.url, html);
  page.site.extractor().extract_page(page.site, &parsed)
}

/// Classifies, fetches and extracts paper pages.
pub struct Extractor<F = HttpFetcher> {
  /// Source of page bodies
  fetcher:     F,
  /// Maximum concurrent fetches in [`Extractor::extract_many`]
  concurrency: usize,
}

impl Extractor<HttpFetcher> {
  /// Creates an extractor that fetches over HTTP with default settings.
  pub fn new() -> Result<Self> { Self::from_config(&Config::default()) }

  /// Creates an extractor from a loaded configuration.
  pub fn from_config(config: &Config) -> Result<Self> {
    Ok(Self {
      fetcher:     HttpFetcher::with_config(&config.fetch)?,
      concurrency: config.batch_concurrency.max(1),
    })
  }
}

impl<F: PageFetcher> Extractor<F> {
  /// Creates an extractor over any page source.
  pub fn with_fetcher(fetcher: F) -> Self { Self { fetcher, concurrency: 4 } }

  /// Sets how many pages [`Extractor::extract_many`] fetches at once.
  pub fn with_concurrency(mut self, concurrency: usize) -> Self {
    self.concurrency = concurrency.max(1);
    self
  }

  /// Extracts paper metadata from the page at `url`.
  ///
  /// # Errors
  ///
  /// - [`GnosisError::UnsupportedSite`] if the URL matches no supported site; no
  ///   request is made
  /// - [`GnosisError::Fetch`] if the page could not be retrieved; nothing is extracted
  ///
  /// A fetched page that lacks some fields is not an error here, see
  /// [`ExtractionResult::is_complete`].
  pub async fn extract(&self, url: &str) -> Result<Extraction> {
    let page = classify(url).ok_or_else(|| GnosisError::UnsupportedSite(url.to_string()))?;
    let html = self.fetcher.fetch(&page).await?;
    let result = extract_fields(&page, &html);
    Ok(Extraction { page, result })
  }

  /// Extracts many pages, one independent request each.
  ///
  /// Results are returned in input order. A failure for one URL does not affect
  /// the others.
  pub async fn extract_many<S: AsRef<str>>(&self, urls: &[S]) -> Vec<Result<Extraction>> {
    stream::iter(urls.iter().map(|url| self.extract(url.as_ref())))
      .buffered(self.concurrency)
      .collect()
      .await
  }
}

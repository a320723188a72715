//! Paper metadata extraction and cataloguing for academic hosting sites.
//!
//! `gnosis` turns the URL of a paper page into structured metadata and keeps a
//! small local catalog of imported papers. It provides:
//!
//! - URL classification against a fixed set of supported hosting sites
//! - Page fetching with a per-site request policy
//! - Per-site extraction of title, authors, abstract and PDF link
//! - A hand-off type for turning an extraction into a catalog entry
//! - A SQLite catalog of papers and their ordered authors
//!
//! # Supported sites
//!
//! - arXiv (`arxiv.org`)
//! - NeurIPS proceedings (`papers.nips.cc`, `papers.neurips.cc`)
//! - JMLR (`jmlr.org`)
//! - PMLR (`proceedings.mlr.press`)
//! - CVF open access (`openaccess.thecvf.com`)
//! - Robotics: Science and Systems (`roboticsproceedings.org`)
//! - IEEE Xplore (`ieeexplore.ieee.org`)
//! - ACM Digital Library (`dl.acm.org`)
//!
//! # Getting Started
//!
//! ```no_run
//! use gnosis::{database::Database, draft::PaperDraft, extract::Extractor, prelude::*};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let extractor = Extractor::new()?;
//!   let extraction = extractor.extract("https://arxiv.org/abs/1706.03762").await?;
//!   println!("Title: {:?}", extraction.result.title);
//!
//!   // Hand the extraction to the catalog
//!   let draft = PaperDraft::from_extraction(extraction)?;
//!   let db = Database::open(Database::default_path()).await?;
//!   let id = db.add_paper(&draft).await?;
//!   println!("Stored as paper {id}");
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`site`]: Source site tags and URL classification
//! - [`fetch`]: Page retrieval
//! - [`extract`]: Per-site field extraction and orchestration
//! - [`draft`]: Extraction to catalog hand-off
//! - [`person`]: Author name handling
//! - [`search`]: Keyword ranking
//! - [`database`]: Catalog storage
//! - [`config`]: Configuration files
//! - [`error`]: Error types

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
  time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod database;
pub mod draft;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod person;
pub mod search;
pub mod site;

use crate::{error::*, site::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use gnosis::{extract::Extractor, prelude::*};
///
/// async fn example() -> Result<(), GnosisError> {
///   let extraction = Extractor::new()?.extract("https://arxiv.org/abs/1706.03762").await?;
///   println!("{:?}", extraction.site());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::{FetchError, GnosisError},
    extract::PaperExtractor,
    fetch::PageFetcher,
    site::SourceSite,
  };
}

//! Local SQLite catalog of imported papers.
//!
//! The catalog stores papers, the people who wrote them, and the ordered
//! authorship between the two. It supports:
//! - Adding a [`PaperDraft`] with duplicate-title rejection
//! - Matching authors against people already in the catalog
//! - Lookup by id and by exact title
//! - Keyword-ranked title search
//!
//! The schema is created when the database is opened.
//!
//! # Examples
//!
//! ```no_run
//! # use gnosis::{database::Database, draft::PaperDraft};
//! # async fn example(draft: PaperDraft) -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::open("catalog.db").await?;
//! let id = db.add_paper(&draft).await?;
//!
//! for author in db.authors_of(id).await? {
//!   println!("{author}");
//! }
//!
//! let hits = db.search("graph neural").await?;
//! # Ok(())
//! # }
//! ```

use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;

use super::*;
use crate::{
  draft::PaperDraft,
  person::PersonName,
  search::{rank_by_keywords, Titled},
};


/// Columns selected for a [`StoredPaper`], in [`StoredPaper::from_row`] order.
const PAPER_COLUMNS: &str =
  "id, title, abstract_text, download_link, source_link, source_site, created_at";

/// Handle for the paper catalog.
pub struct Database {
  /// Async SQLite connection handle
  conn: Connection,
}

/// A paper as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPaper {
  /// Catalog id
  pub id:            i64,
  /// Paper title
  pub title:         String,
  /// Abstract text
  pub abstract_text: String,
  /// PDF location, or the source page when none was found
  pub download_link: String,
  /// Page the paper was imported from
  pub source_link:   String,
  /// Site the paper was imported from, if imported
  pub source_site:   Option<SourceSite>,
  /// When the paper was added
  pub created_at:    DateTime<Utc>,
}

impl StoredPaper {
  /// Reads a paper from a row selected with [`PAPER_COLUMNS`].
  fn from_row(row: &Row) -> rusqlite::Result<Self> {
    let source_site = row
      .get::<_, Option<String>>(5)?
      .map(|tag| SourceSite::from_str(&tag))
      .transpose()
      .map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
      })?;

    Ok(Self {
      id: row.get(0)?,
      title: row.get(1)?,
      abstract_text: row.get(2)?,
      download_link: row.get(3)?,
      source_link: row.get(4)?,
      source_site,
      created_at: row.get(6)?,
    })
  }
}

impl Titled for StoredPaper {
  fn title(&self) -> &str { &self.title }
}

/// How an author name was resolved against the people in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorLink {
  /// No such person existed, one was created and linked
  Created(i64),
  /// Exactly one person had this name and was linked
  Matched(i64),
  /// Several people share this name, nobody was linked
  Ambiguous,
  /// The name has fewer than two parts and was skipped
  Unparsable,
}

impl Database {
  /// Opens an existing catalog or creates a new one at the specified path.
  ///
  /// Parent directories are created as needed.
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use gnosis::database::Database;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let db = Database::open(Database::default_path()).await?;
  /// # Ok(())
  /// # }
  /// ```
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    if let Some(parent) = path.as_ref().parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent)?;
      }
    }
    let conn = Connection::open(path.as_ref()).await?;

    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    debug!("Opened catalog at {}", path.as_ref().display());
    Ok(Self { conn })
  }

  /// Returns the default path for the catalog file.
  ///
  /// - On Unix: `~/.local/share/gnosis/gnosis.db`
  /// - On macOS: `~/Library/Application Support/gnosis/gnosis.db`
  /// - On Windows: `%APPDATA%\gnosis\gnosis.db`
  /// - Fallback: `./gnosis/gnosis.db`
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("gnosis").join("gnosis.db")
  }

  /// Adds a paper and links its authors in order.
  ///
  /// Each author name is split into first, middle and last name and matched
  /// exactly against the people already in the catalog: with no match a person is
  /// created, with one match that person is linked, and with several matches the
  /// author is left unlinked. Everything happens in one transaction.
  ///
  /// # Errors
  ///
  /// Returns [`GnosisError::DuplicatePaper`] if a paper with exactly this title is
  /// already in the catalog.
  pub async fn add_paper(&self, draft: &PaperDraft) -> Result<i64> {
    let draft = draft.clone();
    let title = draft.title.clone();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing: i64 =
          tx.query_row("SELECT COUNT(*) FROM papers WHERE title = ?1", [&draft.title], |row| {
            row.get(0)
          })?;
        if existing > 0 {
          return Ok(None);
        }

        let paper_id: i64 = tx.query_row(
          "INSERT INTO papers (
             title, abstract_text, download_link, source_link, source_site, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           RETURNING id",
          params![
            &draft.title,
            &draft.abstract_text,
            &draft.download_link,
            &draft.source_link,
            draft.source_site.map(|site| site.to_string()),
            Utc::now(),
          ],
          |row| row.get(0),
        )?;

        for (index, author) in draft.authors.iter().enumerate() {
          let link = link_author(&tx, paper_id, author, index as i64 + 1)?;
          trace!("Author {author:?} of paper {paper_id}: {link:?}");
        }

        tx.commit()?;
        Ok(Some(paper_id))
      })
      .await?;

    inserted.ok_or(GnosisError::DuplicatePaper(title))
  }

  /// Retrieves a paper by its catalog id.
  pub async fn get_paper(&self, id: i64) -> Result<Option<StoredPaper>> {
    self
      .conn
      .call(move |conn| {
        let paper = conn
          .query_row(
            &format!("SELECT {PAPER_COLUMNS} FROM papers WHERE id = ?1"),
            [id],
            StoredPaper::from_row,
          )
          .optional()?;
        Ok(paper)
      })
      .await
      .map_err(GnosisError::from)
  }

  /// Retrieves a paper by its exact title.
  pub async fn find_by_title(&self, title: &str) -> Result<Option<StoredPaper>> {
    let title = title.to_string();
    self
      .conn
      .call(move |conn| {
        let paper = conn
          .query_row(
            &format!("SELECT {PAPER_COLUMNS} FROM papers WHERE title = ?1 ORDER BY id LIMIT 1"),
            [title],
            StoredPaper::from_row,
          )
          .optional()?;
        Ok(paper)
      })
      .await
      .map_err(GnosisError::from)
  }

  /// Lists every paper in insertion order.
  pub async fn papers(&self) -> Result<Vec<StoredPaper>> {
    self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare_cached(&format!("SELECT {PAPER_COLUMNS} FROM papers ORDER BY id"))?;
        let papers: Vec<StoredPaper> =
          stmt.query_map([], StoredPaper::from_row)?.collect::<rusqlite::Result<_>>()?;
        Ok(papers)
      })
      .await
      .map_err(GnosisError::from)
  }

  /// Lists the linked authors of a paper, first author first.
  pub async fn authors_of(&self, paper_id: i64) -> Result<Vec<PersonName>> {
    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(
          "SELECT p.first_name, p.middle_name, p.last_name
             FROM people p
             JOIN paper_authors pa ON pa.person_id = p.id
            WHERE pa.paper_id = ?1
            ORDER BY pa.author_order",
        )?;
        let authors: Vec<PersonName> = stmt
          .query_map([paper_id], |row| {
            Ok(PersonName { first: row.get(0)?, middle: row.get(1)?, last: row.get(2)? })
          })?
          .collect::<rusqlite::Result<_>>()?;
        Ok(authors)
      })
      .await
      .map_err(GnosisError::from)
  }

  /// Counts the people in the catalog.
  pub async fn people_count(&self) -> Result<i64> {
    self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM people", [], |row| row.get(0))?))
      .await
      .map_err(GnosisError::from)
  }

  /// Ranks catalog papers by how many of the keywords occur in their titles.
  ///
  /// See [`rank_by_keywords`]; an empty query lists every paper.
  pub async fn search(&self, keywords: &str) -> Result<Vec<StoredPaper>> {
    let papers = self.papers().await?;
    Ok(rank_by_keywords(papers, keywords))
  }
}

/// Resolves one author name against the people table and links it to a paper.
fn link_author(
  tx: &rusqlite::Transaction<'_>,
  paper_id: i64,
  author: &str,
  order: i64,
) -> rusqlite::Result<AuthorLink> {
  let Some(name) = PersonName::parse(author) else {
    warn!("Cannot split author name {author:?} into first and last name, skipping");
    return Ok(AuthorLink::Unparsable);
  };

  let matches: Vec<i64> = {
    let mut stmt = tx.prepare_cached(
      "SELECT id FROM people WHERE first_name = ?1 AND middle_name IS ?2 AND last_name = ?3",
    )?;
    let ids = stmt
      .query_map(params![&name.first, &name.middle, &name.last], |row| row.get(0))?
      .collect::<rusqlite::Result<Vec<i64>>>()?;
    ids
  };

  let (person_id, link) = match matches.as_slice() {
    [] => {
      let id = tx.query_row(
        "INSERT INTO people (first_name, middle_name, last_name) VALUES (?1, ?2, ?3) RETURNING id",
        params![&name.first, &name.middle, &name.last],
        |row| row.get(0),
      )?;
      (id, AuthorLink::Created(id))
    },
    [id] => (*id, AuthorLink::Matched(*id)),
    _ => {
      warn!("{} people are named {name}, not linking any of them", matches.len());
      return Ok(AuthorLink::Ambiguous);
    },
  };

  tx.execute(
    "INSERT OR IGNORE INTO paper_authors (paper_id, person_id, author_order) VALUES (?1, ?2, ?3)",
    params![paper_id, person_id, order],
  )?;
  Ok(link)
}

//! Author names as stored in the catalog.
//!
//! Extracted author strings carry full names only. The catalog keeps people as
//! first, middle and last name, split on whitespace: the first token is the
//! first name, the last token the last name, and anything in between is the
//! middle name.

use super::*;

/// A person's name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
  /// Given name
  pub first:  String,
  /// Middle name(s), space separated
  pub middle: Option<String>,
  /// Family name
  pub last:   String,
}

impl PersonName {
  /// Splits a full name into first, middle and last name.
  ///
  /// Returns `None` for names with fewer than two parts, which cannot be
  /// matched against the catalog.
  ///
  /// ```
  /// use gnosis::person::PersonName;
  ///
  /// let name = PersonName::parse("John Ronald Reuel Tolkien").unwrap();
  /// assert_eq!(name.first, "John");
  /// assert_eq!(name.middle.as_deref(), Some("Ronald Reuel"));
  /// assert_eq!(name.last, "Tolkien");
  ///
  /// assert!(PersonName::parse("Plato").is_none());
  /// ```
  pub fn parse(full: &str) -> Option<Self> {
    let parts: Vec<&str> = full.split_whitespace().collect();
    match parts.as_slice() {
      [] | [_] => None,
      [first, middle @ .., last] => Some(Self {
        first:  (*first).to_string(),
        middle: (!middle.is_empty()).then(|| middle.join(" ")),
        last:   (*last).to_string(),
      }),
    }
  }
}

impl Display for PersonName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.middle {
      Some(middle) => write!(f, "{} {} {}", self.first, middle, self.last),
      None => write!(f, "{} {}", self.first, self.last),
    }
  }
}

/// Splits an extracted author string into individual full names, in order.
pub fn split_authors(authors: &str) -> Vec<String> {
  authors.split(',').map(str::trim).filter(|name| !name.is_empty()).map(str::to_string).collect()
}

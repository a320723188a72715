//! Keyword ranking over paper titles.
//!
//! A linear scan: each keyword that occurs in a title, ignoring case, adds one to
//! that title's score. There is no index.

/// Something with a title that can be ranked.
pub trait Titled {
  /// The text keywords are matched against.
  fn title(&self) -> &str;
}

/// Ranks `items` by how many of the whitespace-separated `keywords` occur in
/// their titles.
///
/// Items matching no keyword are dropped. Lower scores come first, so the best
/// match is last, and equal scores keep their original order. An empty query
/// returns every item unchanged.
///
/// ```
/// use gnosis::search::{rank_by_keywords, Titled};
///
/// struct Entry(&'static str);
/// impl Titled for Entry {
///   fn title(&self) -> &str { self.0 }
/// }
///
/// let ranked = rank_by_keywords(
///   vec![Entry("Deep Learning"), Entry("Deep Residual Learning"), Entry("Graphs")],
///   "residual learning",
/// );
/// assert_eq!(ranked.iter().map(|e| e.0).collect::<Vec<_>>(), ["Deep Learning", "Deep Residual Learning"]);
/// ```
pub fn rank_by_keywords<T: Titled>(items: Vec<T>, keywords: &str) -> Vec<T> {
  let tokens: Vec<String> = keywords.split_whitespace().map(str::to_lowercase).collect();
  if tokens.is_empty() {
    return items;
  }

  let mut scored: Vec<(usize, T)> = items
    .into_iter()
    .map(|item| {
      let title = item.title().to_lowercase();
      let score = tokens.iter().filter(|token| title.contains(token.as_str())).count();
      (score, item)
    })
    .filter(|(score, _)| *score > 0)
    .collect();

  // Stable, so ties stay in insertion order
  scored.sort_by_key(|(score, _)| *score);
  scored.into_iter().map(|(_, item)| item).collect()
}

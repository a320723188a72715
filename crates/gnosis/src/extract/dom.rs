//! Lookup and cleanup helpers shared by the site extractors.
//!
//! Every lookup returns an empty result instead of failing, so a page that is
//! missing one node only loses the field that node provides.

use super::*;

/// Elements matching `css`, in document order.
///
/// An unparsable selector is logged and matches nothing.
pub(crate) fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
  match Selector::parse(css) {
    Ok(selector) => document.select(&selector).collect(),
    Err(e) => {
      warn!("Invalid selector {css:?}: {e:?}");
      Vec::new()
    },
  }
}

/// Descendants of `element` matching `css`, in document order.
pub(crate) fn select_within<'a>(element: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
  match Selector::parse(css) {
    Ok(selector) => element.select(&selector).collect(),
    Err(e) => {
      warn!("Invalid selector {css:?}: {e:?}");
      Vec::new()
    },
  }
}

/// First element matching `css`.
pub(crate) fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
  select(document, css).into_iter().next()
}

/// All text below `element`, concatenated.
pub(crate) fn text_of(element: ElementRef<'_>) -> String { element.text().collect() }

/// Text of the first element matching `css`.
pub(crate) fn first_text(document: &Html, css: &str) -> Option<String> {
  select_first(document, css).map(text_of)
}

/// Text of the first element matching `css`, warning when there are several.
pub(crate) fn first_of_many(document: &Html, css: &str, field: &str) -> Option<String> {
  let candidates = select(document, css);
  if candidates.len() > 1 {
    warn!("Found {} candidates for the {field} ({css}), using the first one", candidates.len());
  }
  candidates.into_iter().next().map(text_of)
}

/// The `content` attribute of every `<meta name="...">` with the given name.
pub(crate) fn meta_contents(document: &Html, name: &str) -> Vec<String> {
  select(document, &format!(r#"meta[name="{name}"]"#))
    .into_iter()
    .filter_map(|meta| meta.value().attr("content"))
    .map(str::to_string)
    .collect()
}

/// The `content` attribute of the first `<meta name="...">` with the given name.
pub(crate) fn meta_content(document: &Html, name: &str) -> Option<String> {
  meta_contents(document, name).into_iter().next()
}

/// Text of the nodes that follow `element`, skipping whitespace-only ones.
///
/// Looks at most two siblings ahead: some pages put a blank text node between a
/// heading and the paragraph that belongs to it.
pub(crate) fn following_text(element: ElementRef<'_>) -> Option<String> {
  element
    .next_siblings()
    .take(2)
    .map(|node| match node.value().as_text() {
      Some(text) => text.to_string(),
      None => ElementRef::wrap(node).map(text_of).unwrap_or_default(),
    })
    .find(|text| !text.trim().is_empty())
}

/// Trims a title and removes a leading `Title:` label.
pub(crate) fn clean_title(raw: &str) -> Option<String> {
  let title = raw.trim();
  let title = title.strip_prefix("Title:").unwrap_or(title).trim();
  non_empty(title)
}

/// Whitespace-trimmed text, or `None` when nothing is left.
pub(crate) fn non_empty(text: &str) -> Option<String> {
  let text = text.trim();
  (!text.is_empty()).then(|| text.to_string())
}

/// Normalizes a raw abstract into a single paragraph.
///
/// Surrounding whitespace is removed. arXiv abstracts wrap across lines, so their
/// newlines become spaces. Every other site has its carriage returns and newlines
/// deleted outright.
pub fn clean_abstract(site: SourceSite, raw: &str) -> Option<String> {
  let text = raw.trim();
  let text = match site {
    SourceSite::Arxiv => text.replace('\n', " "),
    _ => text.replace(['\r', '\n'], ""),
  };
  non_empty(&text)
}

/// Replaces the last four characters of `url` with `pdf`, turning `x.html` into `x.pdf`.
pub(crate) fn html_to_pdf(url: &str) -> Option<String> {
  let cut = url.char_indices().rev().nth(3).map(|(i, _)| i)?;
  Some(format!("{}pdf", &url[..cut]))
}

//! Supported hosting sites and URL classification.
//!
//! Classification is purely syntactic: the URL is scheme-normalized and then
//! tested against a fixed list of prefix/suffix rules, first match wins. A URL is
//! never dereferenced here, and input that does not match any rule is simply
//! unsupported rather than an error.
//!
//! # Examples
//!
//! ```
//! use gnosis::site::{classify, SourceSite};
//!
//! let page = classify("https://www.jmlr.org/papers/v1/foo.html").unwrap();
//! assert_eq!(page.site, SourceSite::Jmlr);
//! // JMLR does not serve TLS
//! assert_eq!(page.url, "http://www.jmlr.org/papers/v1/foo.html");
//!
//! assert!(classify("https://example.com/paper").is_none());
//! ```

use super::*;

/// An academic paper hosting site with a known page layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SourceSite {
  /// arXiv.org abstract pages
  Arxiv,
  /// NeurIPS (formerly NIPS) proceedings
  NeurIps,
  /// Journal of Machine Learning Research
  Jmlr,
  /// Proceedings of Machine Learning Research
  Pmlr,
  /// Computer Vision Foundation open access
  Cvf,
  /// Robotics: Science and Systems proceedings
  Robotics,
  /// IEEE Xplore document pages
  Ieee,
  /// ACM Digital Library DOI pages
  Acm,
}

impl SourceSite {
  /// Every supported site, in classification precedence order.
  pub const ALL: [SourceSite; 8] = [
    SourceSite::Arxiv,
    SourceSite::NeurIps,
    SourceSite::Jmlr,
    SourceSite::Pmlr,
    SourceSite::Cvf,
    SourceSite::Robotics,
    SourceSite::Ieee,
    SourceSite::Acm,
  ];

  /// Short stable tag used in storage and on the command line.
  pub fn as_str(&self) -> &'static str {
    match self {
      SourceSite::Arxiv => "arxiv",
      SourceSite::NeurIps => "nips",
      SourceSite::Jmlr => "jmlr",
      SourceSite::Pmlr => "pmlr",
      SourceSite::Cvf => "cvf",
      SourceSite::Robotics => "rbtc",
      SourceSite::Ieee => "ieee",
      SourceSite::Acm => "acm",
    }
  }

  /// Whether the site only serves plain HTTP, so requests must use `http://`.
  pub fn requires_plain_http(&self) -> bool {
    matches!(self, SourceSite::Jmlr | SourceSite::Pmlr | SourceSite::Cvf | SourceSite::Robotics)
  }

  /// Whether the site rejects requests that do not look like they come from a browser.
  pub fn requires_browser_agent(&self) -> bool { matches!(self, SourceSite::Acm) }
}

impl Display for SourceSite {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for SourceSite {
  type Err = GnosisError;

  fn from_str(s: &str) -> Result<Self> {
    SourceSite::ALL
      .into_iter()
      .find(|site| site.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| GnosisError::Config(format!("Unknown source site: {s}")))
  }
}

/// A URL that matched one of the supported sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedUrl {
  /// The site the URL belongs to
  pub site: SourceSite,
  /// The scheme-normalized URL that should be requested
  pub url:  String,
}

/// Classifies a raw URL into a supported site.
///
/// The URL is normalized first: a leading `http://` is dropped and `https://` is
/// prepended if missing. Sites without TLS support get their scheme forced back
/// to `http://`. Returns `None` if no rule matches.
pub fn classify(raw: &str) -> Option<ClassifiedUrl> {
  let raw = raw.trim();
  let without_http = raw.strip_prefix("http://").unwrap_or(raw);
  let url = if without_http.starts_with("https://") {
    without_http.to_string()
  } else {
    format!("https://{without_http}")
  };

  let site = match_site(&url)?;
  let url = if site.requires_plain_http() {
    format!("http://{}", &url["https://".len()..])
  } else {
    url
  };

  debug!("Classified {raw} as {site} ({url})");
  Some(ClassifiedUrl { site, url })
}

/// Applies the classification rules to an `https://` URL.
fn match_site(url: &str) -> Option<SourceSite> {
  let site = if url.starts_with("https://arxiv.org") {
    SourceSite::Arxiv
  } else if url.starts_with("https://papers.nips.cc/paper")
    || url.starts_with("https://papers.neurips.cc/paper")
  {
    SourceSite::NeurIps
  } else if url.starts_with("https://www.jmlr.org/papers") || url.starts_with("https://jmlr.org/papers")
  {
    SourceSite::Jmlr
  } else if url.starts_with("https://proceedings.mlr.press/v") && url.ends_with(".html") {
    SourceSite::Pmlr
  } else if url.starts_with("https://openaccess.thecvf.com/content_") && url.ends_with("paper.html")
  {
    SourceSite::Cvf
  } else if url.starts_with("https://www.roboticsproceedings.org/rss")
    || url.starts_with("https://roboticsproceedings.org/rss")
  {
    // The index and author listing pages live under the same prefix
    if url.ends_with("index.html") || url.ends_with("authors.html") {
      return None;
    }
    SourceSite::Robotics
  } else if url.starts_with("https://ieeexplore.ieee.org/document/") {
    SourceSite::Ieee
  } else if url.starts_with("https://dl.acm.org/doi/") {
    SourceSite::Acm
  } else {
    return None;
  };
  Some(site)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_arxiv_keeps_https() {
    let page = classify("https://arxiv.org/abs/1234.5678").unwrap();
    assert_eq!(page.site, SourceSite::Arxiv);
    assert_eq!(page.url, "https://arxiv.org/abs/1234.5678");
  }

  #[test]
  fn test_scheme_normalization() {
    let page = classify("http://arxiv.org/abs/1234.5678").unwrap();
    assert_eq!(page.url, "https://arxiv.org/abs/1234.5678");

    let page = classify("arxiv.org/abs/1234.5678").unwrap();
    assert_eq!(page.url, "https://arxiv.org/abs/1234.5678");

    let page = classify("  papers.nips.cc/paper/7181-attention-is-all-you-need  ").unwrap();
    assert_eq!(page.site, SourceSite::NeurIps);
    assert_eq!(page.url, "https://papers.nips.cc/paper/7181-attention-is-all-you-need");
  }

  #[test]
  fn test_plain_http_sites() {
    let page = classify("https://www.jmlr.org/papers/v1/foo.html").unwrap();
    assert_eq!(page.site, SourceSite::Jmlr);
    assert_eq!(page.url, "http://www.jmlr.org/papers/v1/foo.html");

    let page = classify("jmlr.org/papers/v21/19-001.html").unwrap();
    assert_eq!(page.url, "http://jmlr.org/papers/v21/19-001.html");

    let page = classify("http://proceedings.mlr.press/v97/foo19a.html").unwrap();
    assert_eq!(page.site, SourceSite::Pmlr);
    assert_eq!(page.url, "http://proceedings.mlr.press/v97/foo19a.html");

    let page = classify(
      "https://openaccess.thecvf.com/content_CVPR_2019/html/Foo_Bar_CVPR_2019_paper.html",
    )
    .unwrap();
    assert_eq!(page.site, SourceSite::Cvf);
    assert!(page.url.starts_with("http://openaccess.thecvf.com/"));

    let page = classify("http://www.roboticsproceedings.org/rss12/p01.html").unwrap();
    assert_eq!(page.site, SourceSite::Robotics);
    assert_eq!(page.url, "http://www.roboticsproceedings.org/rss12/p01.html");
  }

  #[test]
  fn test_suffix_rules() {
    assert!(classify("https://proceedings.mlr.press/v97/foo19a.pdf").is_none());
    assert!(classify("https://openaccess.thecvf.com/content_CVPR_2019/html/index.html").is_none());
    assert!(classify("http://www.roboticsproceedings.org/rss12/index.html").is_none());
    assert!(classify("http://roboticsproceedings.org/rss12/authors.html").is_none());
  }

  #[test]
  fn test_ieee_and_acm() {
    let page = classify("https://ieeexplore.ieee.org/document/8578844").unwrap();
    assert_eq!(page.site, SourceSite::Ieee);
    assert_eq!(page.url, "https://ieeexplore.ieee.org/document/8578844");

    let page = classify("dl.acm.org/doi/10.1145/3292500.3330701").unwrap();
    assert_eq!(page.site, SourceSite::Acm);
    assert!(page.site.requires_browser_agent());
  }

  #[test]
  fn test_unsupported() {
    assert!(classify("https://example.com/paper").is_none());
    assert!(classify("").is_none());
    assert!(classify("not a url at all").is_none());
    assert!(classify("https://papers.nips.cc/book/advances-2017").is_none());
  }

  #[test]
  fn test_site_tags_round_trip() {
    for site in SourceSite::ALL {
      assert_eq!(SourceSite::from_str(site.as_str()).unwrap(), site);
    }
    assert!(SourceSite::from_str("springer").is_err());
  }
}

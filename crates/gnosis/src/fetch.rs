//! Page retrieval.
//!
//! A page is retrieved with a single GET request. Failures are split into HTTP
//! status failures and network failures; neither is retried here, retry policy
//! belongs to the caller.

use reqwest::{header::USER_AGENT, Client};

use super::*;
use crate::config::FetchConfig;

/// Something that can turn a classified URL into page HTML.
///
/// [`HttpFetcher`] is the implementation used in practice. Other
/// implementations can serve pages from elsewhere, for example stored fixtures.
#[async_trait]
pub trait PageFetcher: Send + Sync {
  /// Retrieves the HTML body of the page at `page.url`.
  async fn fetch(&self, page: &ClassifiedUrl) -> core::result::Result<String, FetchError>;
}

/// Fetches pages over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
  /// Shared client; carries the timeout and default user agent
  client:             Client,
  /// Identifier sent to sites that only answer browsers
  browser_user_agent: String,
}

impl HttpFetcher {
  /// Creates a fetcher with the default request settings.
  pub fn new() -> Result<Self> { Self::with_config(&FetchConfig::default()) }

  /// Creates a fetcher from explicit request settings.
  pub fn with_config(config: &FetchConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout())
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(GnosisError::Client)?;
    Ok(Self { client, browser_user_agent: config.browser_user_agent.clone() })
  }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
  async fn fetch(&self, page: &ClassifiedUrl) -> core::result::Result<String, FetchError> {
    debug!("Fetching {} page: {}", page.site, page.url);

    let mut request = self.client.get(&page.url);
    if page.site.requires_browser_agent() {
      request = request.header(USER_AGENT, self.browser_user_agent.as_str());
    }

    let network_error = |source| FetchError::Network { url: page.url.clone(), source };
    let response = request.send().await.map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
      warn!("{} answered {} for {}", page.site, status, page.url);
      return Err(FetchError::Http { url: page.url.clone(), status: status.as_u16() });
    }

    let body = response.text().await.map_err(network_error)?;
    trace!("{} response: {body}", page.site);
    Ok(body)
  }
}

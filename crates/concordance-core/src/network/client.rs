use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use url::Url;

use super::config::FetchConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// HTTP client for fetching sentence pages from the external sites.
///
/// Sends browser-like headers and a rotating User-Agent; both timeouts
/// come from [`FetchConfig`], so every adapter call has a bounded wait.
pub struct SiteFetcher {
    config: FetchConfig,
    inner: Client,
}

impl SiteFetcher {
    /// Build a fetcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        let inner = Self::build_client(&config)?;
        Ok(Self { config, inner })
    }

    fn build_client(config: &FetchConfig) -> FetchResult<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.request_timeout_seconds as u64))
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        } else {
            builder = builder.user_agent(random_user_agent());
        }

        builder.build().map_err(FetchError::Http)
    }

    fn validate_request(url: &str) -> FetchResult<()> {
        let parsed = Url::parse(url)?;

        if parsed.host_str().is_none() {
            return Err(FetchError::InvalidUrl("No host in URL".to_string()));
        }

        Ok(())
    }

    /// Fetch a page and return its body as text.
    ///
    /// # Errors
    ///
    /// Fails on an invalid URL, a transport error, a timeout, or a
    /// non-success HTTP status.
    pub async fn fetch(&self, url: &str) -> FetchResult<String> {
        Self::validate_request(url)?;

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(FetchError::Http)?
            .error_for_status()
            .map_err(FetchError::Http)?;

        response.text().await.map_err(FetchError::Http)
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

fn random_user_agent() -> String {
    use rand::Rng;

    let agents = [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; rv:128.0) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
    ];

    let mut rng = rand::rng();
    agents[rng.random_range(0..agents.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_builds_with_default_config() {
        assert!(SiteFetcher::new(FetchConfig::default()).is_ok());
    }

    #[test]
    fn fetcher_builds_with_custom_ua() {
        let config = FetchConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert!(SiteFetcher::new(config).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_url() {
        assert!(matches!(
            SiteFetcher::validate_request("not-a-url"),
            Err(FetchError::UrlParse(_))
        ));
    }

    #[test]
    fn validate_rejects_url_without_host() {
        assert!(matches!(
            SiteFetcher::validate_request("file:///etc/passwd"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn validate_accepts_https_site() {
        assert!(SiteFetcher::validate_request("https://sentencedict.com/happy.html").is_ok());
    }

    #[test]
    fn random_user_agent_is_browser_like() {
        let ua = random_user_agent();
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn config_access() {
        let fetcher = SiteFetcher::new(FetchConfig::default()).unwrap();
        assert_eq!(fetcher.config().request_timeout_seconds, 10);
    }
}

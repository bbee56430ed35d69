//! Authenticated Reader API session
//!
//! One connection-pooled client per process, carrying the auth header and
//! the fixed request timeout. Dropping the session releases pooled
//! connections.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use reader_common::{ReaderError, Result};
use reader_config::Config;

/// Long-lived handle to the Reader API.
///
/// Immutable after construction; concurrent in-flight requests share the
/// pooled client safely.
pub struct Session {
    client: reqwest::Client,
    base_url: String,
}

impl Session {
    /// Build the session from resolved configuration.
    ///
    /// The access token becomes a default `Authorization: Token <token>`
    /// header on every request, marked sensitive so it never shows up in
    /// request debug output.
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Token {}", config.access_token))
            .map_err(|_| {
                ReaderError::Config("access token is not a valid header value".to_string())
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Start a GET request for a path under the API base URL.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    /// Base URL this session is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

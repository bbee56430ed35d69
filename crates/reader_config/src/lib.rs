//! Startup configuration for the Reader MCP server
//!
//! The entire configuration surface is one environment variable holding the
//! Reader API access token; the base URL and request timeout are fixed.

use reader_common::{ReaderError, Result};

/// Base URL of the Reader API.
pub const READER_API_BASE_URL: &str = "https://readwise.io/api/v3";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "READER_ACCESS_TOKEN";

/// Total-request timeout for upstream calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolved process configuration.
///
/// Fields are public so tests can point the session at a mock server;
/// `from_env` always uses the fixed base URL and timeout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Opaque bearer token sent as `Authorization: Token <token>`
    pub access_token: String,

    /// Base URL the session prefixes onto every request path
    pub base_url: String,

    /// Total-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Fails with `ReaderError::Config` if the token variable is unset or
    /// empty. This is fatal: the process must not serve requests without a
    /// credential.
    pub fn from_env() -> Result<Self> {
        Self::from_token(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// Build a configuration from an optional token value.
    pub fn from_token(token: Option<String>) -> Result<Self> {
        match token {
            Some(token) if !token.is_empty() => Ok(Self {
                access_token: token,
                base_url: READER_API_BASE_URL.to_string(),
                timeout_secs: REQUEST_TIMEOUT_SECS,
            }),
            _ => Err(ReaderError::Config(format!(
                "{} environment variable is not set",
                ACCESS_TOKEN_ENV
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_present() {
        let config = Config::from_token(Some("tok_123".to_string())).unwrap();
        assert_eq!(config.access_token, "tok_123");
        assert_eq!(config.base_url, READER_API_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_token_missing_is_fatal() {
        let err = Config::from_token(None).unwrap_err();
        assert!(matches!(err, ReaderError::Config(_)));
        assert!(err.to_string().contains(ACCESS_TOKEN_ENV));
    }

    #[test]
    fn test_from_token_empty_is_fatal() {
        let err = Config::from_token(Some(String::new())).unwrap_err();
        assert!(matches!(err, ReaderError::Config(_)));
    }
}

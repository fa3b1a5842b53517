//! Bearer credential for the Notion API.
//!
//! The integration secret is never stored in configuration files. It is read
//! from the process environment, and [`TokenSource::Env`] re-reads it on every
//! lookup so a server picks up the variable without restarting.

use std::fmt;

/// Notion integration secret sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a secret. Returns `None` for an empty string.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    /// Read the secret from an environment variable.
    ///
    /// Unset, empty and non-UTF-8 values all count as absent.
    #[must_use]
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    /// Value for the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Where the credential is looked up at request time.
#[derive(Clone, Debug)]
pub enum TokenSource {
    /// Environment variable name, read on every call to [`resolve`](Self::resolve).
    Env(String),
    /// Fixed value resolved up front.
    Fixed(Option<ApiToken>),
}

impl TokenSource {
    /// Look up the current credential.
    #[must_use]
    pub fn resolve(&self) -> Option<ApiToken> {
        match self {
            Self::Env(var) => ApiToken::from_env(var),
            Self::Fixed(token) => token.clone(),
        }
    }

    /// Human-readable description of the lookup, for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Env(var) => format!("environment variable {var}"),
            Self::Fixed(_) => "fixed credential".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_absent() {
        assert!(ApiToken::new("").is_none());
        assert!(ApiToken::new("secret_abc").is_some());
    }

    #[test]
    fn test_bearer_header() {
        let token = ApiToken::new("secret_abc").unwrap();
        assert_eq!(token.bearer(), "Bearer secret_abc");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = ApiToken::new("secret_abc").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret_abc"));
    }

    #[test]
    fn test_env_source_reads_at_resolve_time() {
        let source = TokenSource::Env("NDOCS_TEST_TOKEN_RESOLVE".to_owned());
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NDOCS_TEST_TOKEN_RESOLVE");
        }
        assert!(source.resolve().is_none());

        unsafe {
            std::env::set_var("NDOCS_TEST_TOKEN_RESOLVE", "secret_abc");
        }
        assert_eq!(source.resolve(), ApiToken::new("secret_abc"));

        unsafe {
            std::env::remove_var("NDOCS_TEST_TOKEN_RESOLVE");
        }
    }

    #[test]
    fn test_env_source_empty_value_is_absent() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NDOCS_TEST_TOKEN_EMPTY", "");
        }
        let source = TokenSource::Env("NDOCS_TEST_TOKEN_EMPTY".to_owned());
        assert!(source.resolve().is_none());
        unsafe {
            std::env::remove_var("NDOCS_TEST_TOKEN_EMPTY");
        }
    }

    #[test]
    fn test_fixed_source() {
        assert!(TokenSource::Fixed(None).resolve().is_none());
        let source = TokenSource::Fixed(ApiToken::new("t"));
        assert_eq!(source.resolve(), ApiToken::new("t"));
    }

    #[test]
    fn test_describe_env() {
        let source = TokenSource::Env("NOTION_API_KEY".to_owned());
        assert_eq!(source.describe(), "environment variable NOTION_API_KEY");
    }
}

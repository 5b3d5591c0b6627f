use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// A failure to fetch a single resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request exceeded its deadline.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    /// The request could not be sent or its body could not be read.
    #[error("failed to send request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The resource does not exist.
    #[error("{url} not found")]
    NotFound { url: String },
    /// The server responded with a status other than 404 that is not a success.
    #[error("{url} responded with {status}")]
    Http { url: String, status: StatusCode },
    /// The payload was missing expected fields or carried backend-reported errors.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
    /// The caller lost interest in the request.
    #[error("request to {url} was cancelled")]
    Cancelled { url: String },
}

impl FetchError {
    pub(crate) fn malformed<U, R>(url: U, reason: R) -> Self
    where
        U: Into<String>,
        R: ToString,
    {
        Self::MalformedResponse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether another attempt at the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } | Self::Http { .. } => true,
            Self::NotFound { .. } | Self::MalformedResponse { .. } | Self::Cancelled { .. } => false,
        }
    }

    /// The URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url, .. }
            | Self::Transport { url, .. }
            | Self::NotFound { url }
            | Self::Http { url, .. }
            | Self::MalformedResponse { url, .. }
            | Self::Cancelled { url } => url,
        }
    }
}

/// A failure of the snapshot store.
///
/// Persistence is an optimization, so these errors are logged and never fail a load.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
    #[error("snapshot database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("snapshot {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize snapshot {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A failure of a whole catalogue load.
///
/// Individual fetch failures never end a load; only the caller abandoning it does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("catalogue load was cancelled")]
    Cancelled,
}

#[cfg(test)]
mod fetch_error_test {
    use std::time::Duration;

    use reqwest::StatusCode;

    use crate::FetchError;

    #[test]
    fn classifies_retryable_failures() {
        assert!(
            FetchError::Timeout {
                url: "u".to_owned(),
                timeout: Duration::from_secs(1),
            }
            .is_retryable()
        );
        assert!(
            FetchError::Http {
                url: "u".to_owned(),
                status: StatusCode::SERVICE_UNAVAILABLE,
            }
            .is_retryable()
        );
        assert!(!FetchError::NotFound { url: "u".to_owned() }.is_retryable());
        assert!(!FetchError::malformed("u", "no data").is_retryable());
        assert!(!FetchError::Cancelled { url: "u".to_owned() }.is_retryable());
    }

    #[test]
    fn reports_url() {
        let err = FetchError::NotFound {
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_owned(),
        };
        assert_eq!(err.url(), "https://pokeapi.co/api/v2/pokemon/missingno");
        assert_eq!(
            err.to_string(),
            "https://pokeapi.co/api/v2/pokemon/missingno not found"
        );
    }
}

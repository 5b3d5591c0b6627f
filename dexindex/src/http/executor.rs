use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::{
    FetchError,
    http::HttpRequest,
};

/// Timing rules for [`RetryingExecutor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Deadline for each attempt. Does not grow with retries.
    pub timeout: Duration,
    /// Delay after the first failed attempt. Doubles after each following one.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// The delay after the given failed attempt, counting from 0.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.checked_pow(attempt).unwrap_or(u32::MAX))
    }
}

/// Sends requests with a per-attempt timeout and bounded exponential backoff.
///
/// The executor holds no mutable state. Clones share one connection pool, and any number of
/// requests may run through it concurrently.
#[derive(Debug, Clone)]
pub struct RetryingExecutor {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingExecutor {
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_client(reqwest::Client::new(), policy)
    }

    pub fn with_client(client: reqwest::Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Sends the request, retrying retryable failures up to `max_retries` times.
    ///
    /// Returns the body of the first successful response. A 404 fails immediately with
    /// [`FetchError::NotFound`]. Otherwise, the last failure is returned once retries run out.
    pub async fn execute(
        &self,
        request: &HttpRequest,
        max_retries: u32,
        cancel: &CancellationToken,
    ) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            let err = match self.attempt(request, cancel).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };
            if !err.is_retryable() || attempt >= max_retries {
                return Err(err);
            }
            let delay = self.policy.backoff(attempt);
            log::debug!(
                "{} {} failed on attempt {} of {}, retrying in {delay:?}: {err}",
                request.method(),
                request.url(),
                attempt + 1,
                max_retries + 1,
            );
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    return Err(FetchError::Cancelled {
                        url: request.url().to_owned(),
                    });
                }
                _ = tokio::time::sleep(delay) => (),
            }
            attempt += 1;
        }
    }

    /// Like [`Self::execute`], deserializing the body as JSON.
    ///
    /// A body that does not match `T` is a [`FetchError::MalformedResponse`] and is not retried.
    pub async fn execute_json<T>(
        &self,
        request: &HttpRequest,
        max_retries: u32,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(request, max_retries, cancel).await?;
        serde_json::from_str(&body).map_err(|err| FetchError::malformed(request.url(), err))
    }

    async fn attempt(
        &self,
        request: &HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<String, FetchError> {
        let url = request.url();
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_owned(),
            source,
        };
        let send = async {
            let response = request
                .build(&self.client)
                .send()
                .await
                .map_err(transport)?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound {
                    url: url.to_owned(),
                });
            }
            if !status.is_success() {
                return Err(FetchError::Http {
                    url: url.to_owned(),
                    status,
                });
            }
            response.text().await.map_err(transport)
        };

        // Dropping the in-flight future on timeout or cancellation aborts the request.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled { url: url.to_owned() }),
            result = tokio::time::timeout(self.policy.timeout, send) => match result {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout {
                    url: url.to_owned(),
                    timeout: self.policy.timeout,
                }),
            },
        }
    }
}

#[cfg(test)]
mod retry_policy_test {
    use std::time::Duration;

    use crate::http::RetryPolicy;

    #[test]
    fn doubles_backoff_per_attempt() {
        let policy = RetryPolicy {
            timeout: Duration::from_secs(1),
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff(0), Duration::from_millis(100));
        assert_eq!(policy.backoff(1), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(800));
    }

    #[test]
    fn saturates_on_huge_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(64), Duration::from_millis(100).saturating_mul(u32::MAX));
    }
}

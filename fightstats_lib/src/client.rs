//! HTTP page client with user-agent rotation, rate limiting, and retry.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::Rng;
use reqwest::StatusCode;

use crate::error::CrawlError;
use crate::user_agent::get_user_agent;

/// Inter-request delay bounds in milliseconds. The actual delay is drawn
/// uniformly from the range on every request.
#[derive(Debug, Clone, Copy)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    /// No delay at all; used by tests against a local mock server.
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self { min_ms: 500, max_ms: 4000 }
    }
}

struct RetryConfig {
    max_retries: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryConfig {
    fn from_env() -> Self {
        Self {
            max_retries: env_usize("FIGHTSTATS_RETRY_MAX", 3),
            base_delay_ms: env_u64("FIGHTSTATS_RETRY_BASE_MS", 2000),
            max_delay_ms: env_u64("FIGHTSTATS_RETRY_MAX_MS", 30000),
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self.base_delay_ms.saturating_mul(exp).min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// HTTP client for fighter pages.
///
/// Sends browser-like headers with a user agent drawn from the rotation
/// pool on every request, enforces a jittered delay between consecutive
/// fetches (the first request goes out immediately), and retries transient
/// failures with exponential backoff.
pub struct PageClient {
    http: reqwest::Client,
    delay: DelayRange,
    /// Tracks when the last request was sent, for rate limiting.
    last_request: Mutex<Option<Instant>>,
}

impl PageClient {
    pub fn new(delay: DelayRange) -> Result<Self, CrawlError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            delay,
            last_request: Mutex::new(None),
        })
    }

    /// Fetches a page body, retrying transient failures.
    pub async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let cfg = RetryConfig::from_env();
        let mut attempt = 0usize;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    attempt += 1;
                    if attempt > cfg.max_retries || !is_retryable(&err) {
                        return Err(err);
                    }
                    let delay = cfg.delay_for_attempt(attempt);
                    tracing::warn!(
                        url,
                        "fetch failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt,
                        cfg.max_retries,
                        delay.as_secs_f64(),
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, CrawlError> {
        self.rate_limit().await;
        let resp = self
            .http
            .get(url)
            .header("user-agent", get_user_agent())
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .header("upgrade-insecure-requests", "1")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CrawlError::HttpStatus {
                status: resp.status(),
            });
        }

        Ok(resp.text().await?)
    }

    async fn rate_limit(&self) {
        let sleep_dur = {
            let last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(last_time) = *last {
                let elapsed = last_time.elapsed();
                let max = self.delay.max_ms.max(self.delay.min_ms);
                let wait =
                    Duration::from_millis(rand::thread_rng().gen_range(self.delay.min_ms..=max));
                if elapsed < wait {
                    Some(wait - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        };
        if let Some(dur) = sleep_dur {
            tokio::time::sleep(dur).await;
        }
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }
}

fn is_retryable(err: &CrawlError) -> bool {
    match err {
        CrawlError::Http(_) => true,
        CrawlError::HttpStatus { status } => {
            *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
        }
        _ => false,
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let cfg = RetryConfig {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 3000,
        };
        let first = cfg.delay_for_attempt(1);
        assert!(first >= Duration::from_millis(800) && first <= Duration::from_millis(1200));
        let third = cfg.delay_for_attempt(3);
        // 4x base caps at max_delay_ms before jitter.
        assert!(third <= Duration::from_millis(3600));
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!is_retryable(&CrawlError::HttpStatus {
            status: StatusCode::NOT_FOUND
        }));
        assert!(is_retryable(&CrawlError::HttpStatus {
            status: StatusCode::TOO_MANY_REQUESTS
        }));
        assert!(is_retryable(&CrawlError::HttpStatus {
            status: StatusCode::BAD_GATEWAY
        }));
    }
}

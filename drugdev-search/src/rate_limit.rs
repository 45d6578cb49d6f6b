//! Rate limiting for NCBI E-utilities compliance
//!
//! NCBI allows 3 requests per second without an API key and 10 with one.
//! Exceeding the limit can get the caller's IP blocked, so every provider call
//! acquires a token first.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<TokenBucket>>,
}

struct TokenBucket {
    tokens: f64,
    capacity: f64,
    refill_rate: f64, // tokens per second
    last_refill: Instant,
}

impl TokenBucket {
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.refill_rate).min(self.capacity);
        self.last_refill = now;
    }
}

impl RateLimiter {
    /// Create a new rate limiter allowing `rate` requests per second
    ///
    /// # Examples
    ///
    /// ```
    /// use drugdev_search::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(3.0);
    /// ```
    pub fn new(rate: f64) -> Self {
        let rate = if rate > 0.0 { rate } else { 1.0 };
        let capacity = rate.max(1.0);
        Self {
            bucket: Arc::new(Mutex::new(TokenBucket {
                tokens: capacity,
                capacity,
                refill_rate: rate,
                last_refill: Instant::now(),
            })),
        }
    }

    /// 3 requests/second, the limit without an API key
    pub fn ncbi_default() -> Self {
        Self::new(3.0)
    }

    /// 10 requests/second, the limit with an API key
    pub fn ncbi_with_key() -> Self {
        Self::new(10.0)
    }

    /// Acquire a token, waiting until one is available
    #[instrument(skip(self))]
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.lock();
                bucket.refill();

                if bucket.tokens >= 1.0 {
                    bucket.tokens -= 1.0;
                    debug!(remaining_tokens = %bucket.tokens, "Token acquired");
                    return;
                }

                let missing = 1.0 - bucket.tokens;
                Duration::from_secs_f64(missing / bucket.refill_rate)
            };

            debug!(wait_ms = wait.as_millis() as u64, "Waiting for rate limit");
            sleep(wait).await;
        }
    }

    /// Current token count (for tests and monitoring)
    pub fn token_count(&self) -> f64 {
        let mut bucket = self.lock();
        bucket.refill();
        bucket.tokens
    }

    /// Configured requests per second
    pub fn rate(&self) -> f64 {
        self.lock().refill_rate
    }

    fn lock(&self) -> MutexGuard<'_, TokenBucket> {
        self.bucket.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use nonzero_ext::*;
use std::time::Duration;

/// Process-wide throttle for completion API calls. Callers wait rather than fail.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(per_minute: u32, per_second: u32) -> Self {
        let per_minute = NonZeroU32::new(per_minute).unwrap_or(nonzero!(50u32));
        let per_second = NonZeroU32::new(per_second).unwrap_or(nonzero!(5u32));

        let limiter = Arc::new(RateLimiter::direct(
            Quota::per_minute(per_minute)
        ));

        let burst_limiter = Arc::new(RateLimiter::direct(
            Quota::per_second(per_second)
        ));

        Self {
            limiter,
            burst_limiter,
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}

impl Default for ApiRateLimiter {
    fn default() -> Self {
        Self::new(50, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn burst_within_quota_does_not_wait() {
        let limiter = ApiRateLimiter::new(60, 10);
        let started = std::time::Instant::now();

        for _ in 0..3 {
            limiter.acquire().await;
        }

        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn zero_quotas_fall_back_to_defaults() {
        let limiter = ApiRateLimiter::new(0, 0);
        assert!(limiter.limiter.check().is_ok());
        assert!(limiter.burst_limiter.check().is_ok());
    }
}

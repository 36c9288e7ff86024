//! Outbound-call throttle for the completion provider.
//!
//! Two policies, checked in order: a rolling per-minute call cap, then a
//! minimum spacing between calls. Counters only advance on accepted calls.
//! One instance guards the whole process; rejection is recoverable — the
//! completion client routes it to the fallback generator.

use adscope_core::error::AdScopeError;
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Time source, injectable so tests can drive the window and spacing checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source used outside tests.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug)]
struct LimiterState {
    last_call_at: Option<DateTime<Utc>>,
    calls_this_window: u32,
    window_reset_at: DateTime<Utc>,
}

/// Process-wide throttle for outbound completion calls.
pub struct CompletionRateLimiter<C: Clock = SystemClock> {
    clock: C,
    min_interval: Duration,
    max_calls_per_minute: u32,
    state: Mutex<LimiterState>,
}

impl CompletionRateLimiter<SystemClock> {
    pub fn new(min_interval_ms: u64, max_calls_per_minute: u32) -> Self {
        Self::with_clock(SystemClock, min_interval_ms, max_calls_per_minute)
    }
}

impl<C: Clock> CompletionRateLimiter<C> {
    pub fn with_clock(clock: C, min_interval_ms: u64, max_calls_per_minute: u32) -> Self {
        let now = clock.now();
        Self {
            clock,
            min_interval: Duration::milliseconds(min_interval_ms as i64),
            max_calls_per_minute,
            state: Mutex::new(LimiterState {
                last_call_at: None,
                calls_this_window: 0,
                window_reset_at: now + Duration::seconds(60),
            }),
        }
    }

    /// Try to consume one outbound call. On success the spacing and window
    /// counters advance; on rejection they are untouched.
    pub fn attempt(&self) -> Result<(), AdScopeError> {
        let now = self.clock.now();
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Roll the window forward once a minute has passed.
        if now >= state.window_reset_at {
            state.calls_this_window = 0;
            state.window_reset_at = now + Duration::seconds(60);
        }

        if state.calls_this_window >= self.max_calls_per_minute {
            return Err(AdScopeError::RateLimitExceeded(
                "Please try again in a minute.".to_string(),
            ));
        }

        if let Some(last) = state.last_call_at {
            let since_last = now - last;
            if since_last < self.min_interval {
                let wait = self.min_interval - since_last;
                let wait_secs = (wait.num_milliseconds() as f64 / 1000.0).ceil() as i64;
                return Err(AdScopeError::RateLimitExceeded(format!(
                    "Please wait {wait_secs} seconds before making another request."
                )));
            }
        }

        state.last_call_at = Some(now);
        state.calls_this_window += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Manually advanced clock for deterministic limiter tests.
    struct ManualClock {
        now: Arc<Mutex<DateTime<Utc>>>,
    }

    impl ManualClock {
        fn at_epoch() -> (Self, Arc<Mutex<DateTime<Utc>>>) {
            let now = Arc::new(Mutex::new(
                DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
            ));
            (Self { now: now.clone() }, now)
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn advance(handle: &Arc<Mutex<DateTime<Utc>>>, ms: i64) {
        let mut now = handle.lock().unwrap();
        *now += Duration::milliseconds(ms);
    }

    #[test]
    fn test_first_call_passes() {
        let (clock, _) = ManualClock::at_epoch();
        let limiter = CompletionRateLimiter::with_clock(clock, 2000, 20);
        assert!(limiter.attempt().is_ok());
    }

    #[test]
    fn test_min_spacing_rejects_with_wait_message() {
        let (clock, handle) = ManualClock::at_epoch();
        let limiter = CompletionRateLimiter::with_clock(clock, 2000, 20);
        limiter.attempt().unwrap();

        advance(&handle, 500);
        let err = limiter.attempt().unwrap_err();
        // 1500 ms remain; the message rounds up to whole seconds.
        assert!(err.to_string().contains("wait 2 seconds"), "got: {err}");

        advance(&handle, 1500);
        assert!(limiter.attempt().is_ok());
    }

    #[test]
    fn test_rejection_does_not_advance_spacing() {
        let (clock, handle) = ManualClock::at_epoch();
        let limiter = CompletionRateLimiter::with_clock(clock, 2000, 20);
        limiter.attempt().unwrap();

        advance(&handle, 1900);
        assert!(limiter.attempt().is_err());
        // 100 ms later the original spacing has elapsed; a fresh rejection
        // must not have restarted the interval.
        advance(&handle, 100);
        assert!(limiter.attempt().is_ok());
    }

    #[test]
    fn test_window_cap_and_reset() {
        let (clock, handle) = ManualClock::at_epoch();
        let limiter = CompletionRateLimiter::with_clock(clock, 0, 20);

        for i in 0..20 {
            assert!(limiter.attempt().is_ok(), "call {i} should pass");
            advance(&handle, 10);
        }
        let err = limiter.attempt().unwrap_err();
        assert!(err.to_string().contains("try again in a minute"), "got: {err}");

        // Past the window boundary the counter resets.
        advance(&handle, 60_000);
        assert!(limiter.attempt().is_ok());
    }
}

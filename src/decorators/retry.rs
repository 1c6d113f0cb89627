// Fixed-delay retry wrapper for flaky calls (database round trips, mostly)
// Author: kelexine (https://github.com/kelexine)

use crate::config::RetryConfig;
use crate::error::{Result, UtilsError};
use backoff::backoff::{Backoff, Constant};
use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// How many times to call an operation and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    retries: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Build a policy; `retries` must be at least 1 and `delay` non-zero.
    pub fn new(retries: u32, delay: Duration) -> Result<Self> {
        if retries < 1 || delay.is_zero() {
            return Err(UtilsError::InvalidArgument(
                "retries must be >= 1 and delay must be > 0".to_string(),
            ));
        }
        Ok(Self { retries, delay })
    }

    pub fn from_config(config: &RetryConfig) -> Result<Self> {
        Self::new(config.retries, Duration::from_millis(config.delay_ms))
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn schedule(&self) -> Constant {
        Constant::new(self.delay)
    }

    /// Call `operation` until it succeeds or all attempts are used,
    /// returning the last error.
    pub fn run<F, T, E>(&self, name: &str, operation: F) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: Debug,
    {
        self.run_if(name, operation, |_| true)
    }

    /// Like [`run`](Self::run), but only errors accepted by `is_transient`
    /// are retried. Anything else is returned straight away.
    pub fn run_if<F, P, T, E>(
        &self,
        name: &str,
        mut operation: F,
        is_transient: P,
    ) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        P: Fn(&E) -> bool,
        E: Debug,
    {
        let mut schedule = self.schedule();
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!("Running ({}): {}()", attempt, name);

            match operation() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !is_transient(&err) {
                        info!(
                            "Non-retryable error on attempt {}/{}: {:?}",
                            attempt, self.retries, err
                        );
                        return Err(err);
                    }

                    info!("Error on attempt {}/{}: {:?}", attempt, self.retries, err);
                    if attempt >= self.retries {
                        return Err(err);
                    }

                    let delay = schedule.next_backoff().unwrap_or(self.delay);
                    std::thread::sleep(delay);
                }
            }
        }
    }

    /// Async counterpart of [`run`](Self::run); sleeps on the tokio timer.
    pub async fn run_async<F, Fut, T, E>(&self, name: &str, mut operation: F) -> std::result::Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Debug,
    {
        let mut schedule = self.schedule();
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!("Running ({}): {}()", attempt, name);

            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    info!("Error on attempt {}/{}: {:?}", attempt, self.retries, err);
                    if attempt >= self.retries {
                        return Err(err);
                    }

                    let delay = schedule.next_backoff().unwrap_or(self.delay);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

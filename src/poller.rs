//! Status Poller
//!
//! Repeating browser timer with an explicit lifecycle. The tick body is
//! plain async code, so tests drive it directly instead of waiting.

use std::future::Future;
use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::task::spawn_local;

#[derive(Default)]
pub struct Poller {
    interval: Option<Interval>,
}

impl Poller {
    /// Start ticking every `period`, replacing any running schedule
    pub fn start<F, Fut>(&mut self, period: Duration, mut tick: F)
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.stop();
        let millis = period_millis(period);
        tracing::info!(millis, "starting poller");
        self.interval = Some(Interval::new(millis, move || spawn_local(tick())));
    }

    pub fn stop(&mut self) {
        // Dropping the interval clears the browser timer
        if self.interval.take().is_some() {
            tracing::info!("poller stopped");
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer resolution is whole milliseconds; never schedule a zero period
pub fn period_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1)
}

use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use thiserror::Error;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// Shown until the first tick, and on the server where no timer runs.
pub const PLACEHOLDER: &str = "--:--";
/// 24-hour clock so values sort the same way they advance within a day.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Error, Debug, Clone)]
pub enum ClockError {
    #[error("Couldn't schedule clock interval: {0}")]
    Schedule(String),
}

pub fn format_time(now: NaiveDateTime) -> String {
    now.format(TIME_FORMAT).to_string()
}

pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub trait TimerHandle {
    fn cancel(self);
}

/// The host's periodic timer facility.
pub trait IntervalScheduler {
    type Handle: TimerHandle;

    fn schedule(
        &self,
        period: Duration,
        callback: Box<dyn Fn()>,
    ) -> Result<Self::Handle, ClockError>;
}

pub struct ClockTicker;

impl ClockTicker {
    /// Starts pushing the formatted time into `sink` once per [`TICK_INTERVAL`].
    ///
    /// The timer lives exactly as long as the returned guard.
    pub fn start<S, T, F>(
        scheduler: &S,
        source: T,
        sink: F,
    ) -> Result<TickerGuard<S::Handle>, ClockError>
    where
        S: IntervalScheduler,
        T: TimeSource + 'static,
        F: Fn(String) + 'static,
    {
        let handle = scheduler.schedule(
            TICK_INTERVAL,
            Box::new(move || sink(format_time(source.now()))),
        )?;
        log::debug!("clock ticker started");
        Ok(TickerGuard {
            handle: Some(handle),
        })
    }
}

/// Owns the running interval and cancels it when stopped or dropped.
#[must_use = "dropping the guard stops the clock"]
pub struct TickerGuard<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> TickerGuard<H> {
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::debug!("clock ticker stopped");
        }
    }
}

impl<H: TimerHandle> Drop for TickerGuard<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserInterval;

#[cfg(feature = "hydrate")]
mod browser {
    use super::*;
    use leptos::prelude::{set_interval_with_handle, IntervalHandle};

    /// `window.setInterval`, through leptos.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserInterval;

    impl TimerHandle for IntervalHandle {
        fn cancel(self) {
            self.clear();
        }
    }

    impl IntervalScheduler for BrowserInterval {
        type Handle = IntervalHandle;

        fn schedule(
            &self,
            period: Duration,
            callback: Box<dyn Fn()>,
        ) -> Result<IntervalHandle, ClockError> {
            set_interval_with_handle(move || callback(), period)
                .map_err(|e| ClockError::Schedule(format!("{e:?}")))
        }
    }
}

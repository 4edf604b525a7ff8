//! Periodic refresh of the clock display.
//!
//! A single tokio task ticks on a fixed interval and publishes the latest
//! [`ClockSnapshot`] on a `watch` channel. The task lives exactly as long as
//! its [`ClockHandle`].

use crate::calendar::HebrewCalendar;
use crate::config::Config;
use crate::format::{snapshot, ClockSnapshot, SnapshotOptions};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

// ---------------------------------------------------------------------------
// ClockOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOptions {
    pub interval: Duration,
    pub snapshot: SnapshotOptions,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            snapshot: SnapshotOptions::default(),
        }
    }
}

impl ClockOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.clock.refresh_interval(),
            snapshot: config.snapshot_options(),
        }
    }
}

// ---------------------------------------------------------------------------
// ClockState
// ---------------------------------------------------------------------------

/// What is currently on display.
///
/// A failed refresh is logged and leaves the previous snapshot in place.
#[derive(Debug, Default)]
pub struct ClockState {
    current: Option<ClockSnapshot>,
    failures: u64,
}

impl ClockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
        calendar: &dyn HebrewCalendar,
        options: &SnapshotOptions,
    ) -> Option<&ClockSnapshot> {
        match snapshot(now, calendar, options) {
            Ok(snap) => {
                debug!(time = %snap.time, "clock refreshed");
                self.current = Some(snap);
            }
            Err(e) => {
                self.failures += 1;
                warn!(error = %e, failures = self.failures, "clock refresh failed; keeping previous display");
            }
        }
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&ClockSnapshot> {
        self.current.as_ref()
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }
}

// ---------------------------------------------------------------------------
// ClockHandle
// ---------------------------------------------------------------------------

/// Owns the refresh task. Dropping the handle stops the task.
pub struct ClockHandle {
    task: Option<JoinHandle<()>>,
    rx: watch::Receiver<Option<ClockSnapshot>>,
}

impl ClockHandle {
    /// Start ticking against the local wall clock. Must be called from
    /// within a tokio runtime.
    pub fn spawn(calendar: Arc<dyn HebrewCalendar>, options: ClockOptions) -> Self {
        Self::spawn_with_clock(calendar, options, || Local::now().fixed_offset())
    }

    /// Like [`ClockHandle::spawn`] with an explicit time source.
    pub fn spawn_with_clock<F>(
        calendar: Arc<dyn HebrewCalendar>,
        options: ClockOptions,
        mut now: F,
    ) -> Self
    where
        F: FnMut() -> DateTime<FixedOffset> + Send + 'static,
    {
        let (tx, rx) = watch::channel(None);
        let period = options.interval.max(MIN_INTERVAL);
        info!(interval_ms = period.as_millis() as u64, "clock started");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut state = ClockState::new();
            loop {
                interval.tick().await;
                let Some(snap) = state.tick(&now(), calendar.as_ref(), &options.snapshot).cloned()
                else {
                    continue;
                };
                tx.send_if_modified(|current| {
                    if current.as_ref() == Some(&snap) {
                        false
                    } else {
                        *current = Some(snap);
                        true
                    }
                });
            }
        });

        Self {
            task: Some(task),
            rx,
        }
    }

    /// A receiver that wakes on every new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<ClockSnapshot>> {
        self.rx.clone()
    }

    pub fn latest(&self) -> Option<ClockSnapshot> {
        self.rx.borrow().clone()
    }

    /// Stop the refresh task without waiting for it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("clock cancelled");
        }
    }

    /// Stop the refresh task and wait until it has gone away.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            info!("clock stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LuachError, Result};
    use crate::types::{CalendarDate, HebrewMonth};
    use chrono::{NaiveDate, Weekday};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Succeeds for the first `ok_calls` conversions, then fails.
    struct FlakyCalendar {
        calls: AtomicUsize,
        ok_calls: usize,
    }

    impl FlakyCalendar {
        fn new(ok_calls: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                ok_calls,
            }
        }
    }

    impl HebrewCalendar for FlakyCalendar {
        fn to_hebrew(&self, _date: NaiveDate) -> Result<CalendarDate> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.ok_calls {
                Ok(CalendarDate {
                    year: 5785,
                    month: HebrewMonth::Kislev,
                    day_of_month: 25,
                    weekday: Weekday::Wed,
                })
            } else {
                Err(LuachError::Calendar("collaborator unavailable".to_string()))
            }
        }
    }

    fn at(hour: u32, second: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 12, 25, hour, 0, second)
            .unwrap()
    }

    #[test]
    fn state_keeps_previous_snapshot_on_failure() {
        let calendar = FlakyCalendar::new(1);
        let options = SnapshotOptions::default();
        let mut state = ClockState::new();

        let first = state.tick(&at(18, 0), &calendar, &options).cloned().unwrap();
        assert_eq!(first.hebrew_date.as_deref(), Some("כה כסלו תשפ\"ה"));
        assert_eq!(first.part_of_day, "ערב");

        let second = state.tick(&at(18, 1), &calendar, &options).cloned();
        assert_eq!(second, Some(first));
        assert_eq!(state.failures(), 1);
    }

    #[test]
    fn state_starts_empty_when_first_tick_fails() {
        let calendar = FlakyCalendar::new(0);
        let mut state = ClockState::new();
        assert!(state
            .tick(&at(9, 0), &calendar, &SnapshotOptions::default())
            .is_none());
        assert!(state.current().is_none());
    }

    #[test]
    fn options_from_config() {
        let mut config = Config::default();
        config.clock.refresh_interval_ms = 250;
        config.display.show_hebrew_date = false;
        let options = ClockOptions::from_config(&config);
        assert_eq!(options.interval, Duration::from_millis(250));
        assert!(!options.snapshot.show_hebrew_date);
    }

    #[tokio::test]
    async fn handle_publishes_snapshots() {
        let options = ClockOptions {
            interval: Duration::from_millis(10),
            ..ClockOptions::default()
        };
        let mut second = 0;
        let handle = ClockHandle::spawn_with_clock(
            Arc::new(FlakyCalendar::new(usize::MAX)),
            options,
            move || {
                second = (second + 1) % 60;
                at(10, second)
            },
        );
        let mut rx = handle.subscribe();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("no snapshot within timeout")
            .unwrap();
        let snap = handle.latest().unwrap();
        assert_eq!(snap.hebrew_weekday, "יום רביעי");
        assert!(handle.is_running());
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn failures_do_not_clear_the_display() {
        let options = ClockOptions {
            interval: Duration::from_millis(5),
            ..ClockOptions::default()
        };
        let mut second = 0;
        let handle = ClockHandle::spawn_with_clock(
            Arc::new(FlakyCalendar::new(1)),
            options,
            move || {
                second = (second + 1) % 60;
                at(10, second)
            },
        );
        let mut rx = handle.subscribe();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("no snapshot within timeout")
            .unwrap();
        let first = handle.latest().unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.latest(), Some(first));
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn shutdown_closes_the_channel() {
        let handle = ClockHandle::spawn_with_clock(
            Arc::new(FlakyCalendar::new(usize::MAX)),
            ClockOptions {
                interval: Duration::from_millis(10),
                ..ClockOptions::default()
            },
            || at(10, 0),
        );
        let mut rx = handle.subscribe();
        handle.shutdown().await;
        // Sender went away with the task, so pending changes end in an error
        // once the last value has been seen.
        rx.borrow_and_update();
        assert!(rx.changed().await.is_err());
    }

    /// Waits for the refresh task to drop its sender.
    async fn assert_sender_gone(rx: &mut watch::Receiver<Option<ClockSnapshot>>) {
        rx.borrow_and_update();
        let changed = tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("refresh task still alive");
        assert!(changed.is_err());
    }

    #[tokio::test]
    async fn cancel_stops_the_task() {
        let mut handle = ClockHandle::spawn_with_clock(
            Arc::new(FlakyCalendar::new(usize::MAX)),
            ClockOptions {
                interval: Duration::from_millis(10),
                ..ClockOptions::default()
            },
            || at(10, 0),
        );
        let mut rx = handle.subscribe();
        assert!(handle.is_running());
        handle.cancel();
        assert!(!handle.is_running());
        assert_sender_gone(&mut rx).await;
    }

    #[tokio::test]
    async fn dropping_the_handle_stops_the_task() {
        let handle = ClockHandle::spawn_with_clock(
            Arc::new(FlakyCalendar::new(usize::MAX)),
            ClockOptions {
                interval: Duration::from_millis(10),
                ..ClockOptions::default()
            },
            || at(10, 0),
        );
        let mut rx = handle.subscribe();
        drop(handle);
        assert_sender_gone(&mut rx).await;
    }
}

//! The countdown timer task.
//!
//! This module provides the background countdown unit:
//! - An isolated tokio task owning all countdown state
//! - Start/stop commands delivered over an mpsc channel
//! - Tick/timeout notifications pushed back on a second channel
//! - Remaining time recomputed from the clock on every poll
//!
//! Remaining time is always `max(0, duration - elapsed)` measured against the
//! start epoch, never a decremented counter, so a delayed or throttled host
//! does not accumulate drift.

use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

use crate::types::{TimerCommand, TimerEvent};

use super::error::TimerError;

// ============================================================================
// Constants
// ============================================================================

/// Fixed polling cadence for tick notifications.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Longest accepted countdown duration (24 hours).
pub const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

// ============================================================================
// CountdownTimer
// ============================================================================

/// An in-progress countdown.
struct ActiveCountdown {
    /// Epoch captured when the start command was handled
    started_at: Instant,
    /// Total countdown duration
    duration: Duration,
}

/// The countdown timer task.
///
/// Owns all countdown state exclusively; the controller communicates with it
/// only through the command and event channels. One task instance serves one
/// countdown use-case and runs at most one periodic notifier at a time.
pub struct CountdownTimer {
    /// Inbound command channel
    command_rx: mpsc::UnboundedReceiver<TimerCommand>,
    /// Outbound notification channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    /// Polling cadence
    poll_interval: Duration,
    /// Current countdown, `None` while idle
    active: Option<ActiveCountdown>,
}

impl CountdownTimer {
    /// Creates a new countdown timer with the default 50 ms poll cadence.
    pub fn new(
        command_rx: mpsc::UnboundedReceiver<TimerCommand>,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        Self {
            command_rx,
            event_tx,
            poll_interval: POLL_INTERVAL,
            active: None,
        }
    }

    /// Overrides the poll cadence.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Runs the timer loop until the command channel closes.
    ///
    /// This method should be spawned as a separate tokio task. While a
    /// countdown is active it polls on the fixed cadence; while idle it only
    /// waits for commands.
    pub async fn run(mut self) {
        let mut ticker = new_ticker(self.poll_interval);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => {
                    match command {
                        Some(TimerCommand::Start { duration }) => {
                            // Replacing `active` and re-arming the ticker in
                            // one step retires the previous notifier before
                            // the new cadence begins; tick streams never
                            // interleave.
                            self.active = Some(ActiveCountdown {
                                started_at: Instant::now(),
                                duration: Duration::from_millis(duration),
                            });
                            ticker = new_ticker(self.poll_interval);
                        }
                        Some(TimerCommand::Stop) => {
                            // Idempotent: stopping an idle timer is a no-op.
                            self.active = None;
                        }
                        None => break,
                    }
                }
                _ = ticker.tick(), if self.active.is_some() => {
                    self.poll();
                }
            }
        }
    }

    /// Emits one tick, and the terminal timeout once remaining time hits zero.
    fn poll(&mut self) {
        let Some(active) = &self.active else {
            return;
        };

        let elapsed = active.started_at.elapsed();
        let remaining = active.duration.saturating_sub(elapsed);
        let remaining_ms = remaining.as_millis() as u64;

        if self.event_tx.send(TimerEvent::Tick { remaining_ms }).is_err() {
            // Controller dropped the event channel; nothing left to notify.
            self.active = None;
            return;
        }

        if remaining_ms == 0 {
            let _ = self.event_tx.send(TimerEvent::Timeout);
            self.active = None;
        }
    }
}

/// Creates an interval whose first deadline is one full period away.
fn new_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

// ============================================================================
// CountdownHandle
// ============================================================================

/// Command side of a spawned countdown timer task.
///
/// Sends are fire-and-forget: acknowledgment, if any, arrives later as an
/// event on the notification channel.
#[derive(Clone)]
pub struct CountdownHandle {
    command_tx: mpsc::UnboundedSender<TimerCommand>,
}

impl CountdownHandle {
    /// (Re)starts the countdown.
    ///
    /// A countdown already in progress is cancelled and replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration exceeds [`MAX_DURATION_MS`] or the
    /// task has exited.
    pub fn start(&self, duration_ms: u64) -> Result<(), TimerError> {
        if duration_ms > MAX_DURATION_MS {
            return Err(TimerError::DurationOutOfRange { duration_ms });
        }

        self.command_tx
            .send(TimerCommand::Start {
                duration: duration_ms,
            })
            .map_err(|_| TimerError::Disconnected)
    }

    /// Halts any in-progress countdown. A no-op when the timer is idle.
    ///
    /// # Errors
    ///
    /// Returns an error if the task has exited.
    pub fn stop(&self) -> Result<(), TimerError> {
        self.command_tx
            .send(TimerCommand::Stop)
            .map_err(|_| TimerError::Disconnected)
    }
}

/// Spawns a countdown timer task with the default poll cadence.
///
/// Returns the command handle and the notification channel. The task exits
/// when every handle clone is dropped.
pub fn spawn() -> (CountdownHandle, mpsc::UnboundedReceiver<TimerEvent>) {
    spawn_with_poll_interval(POLL_INTERVAL)
}

/// Spawns a countdown timer task with a custom poll cadence.
pub fn spawn_with_poll_interval(
    poll_interval: Duration,
) -> (CountdownHandle, mpsc::UnboundedReceiver<TimerEvent>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let timer = CountdownTimer::new(command_rx, event_tx).with_poll_interval(poll_interval);
    tokio::spawn(timer.run());

    (CountdownHandle { command_tx }, event_rx)
}

// ============================================================================
// Tests
// ============================================================================

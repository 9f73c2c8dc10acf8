//! Scoped countdown timer.
//!
//! Time-driven UI updates (offer countdowns, polling heartbeats) run on
//! their own task, independent of the poller's timing, and publish over a
//! watch channel. Dropping the [`Countdown`] aborts the task, so no tick
//! can fire after its owner is gone.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct Countdown {
    rx: watch::Receiver<Duration>,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking toward `deadline`, publishing the remaining time every
    /// `period`. The task stops on its own once the deadline passes.
    pub fn start(deadline: DateTime<Utc>, period: Duration) -> Self {
        let (tx, rx) = watch::channel(remaining(deadline));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick fires immediately; skip it so the
            // initial channel value stands for one full period.
            interval.tick().await;
            loop {
                interval.tick().await;
                let left = remaining(deadline);
                if tx.send(left).is_err() {
                    break;
                }
                if left.is_zero() {
                    break;
                }
            }
        });

        Self { rx, handle }
    }

    /// Receiver for tick updates. Closes when the countdown finishes or is
    /// dropped.
    pub fn subscribe(&self) -> watch::Receiver<Duration> {
        self.rx.clone()
    }

    pub fn remaining(&self) -> Duration {
        *self.rx.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn remaining(deadline: DateTime<Utc>) -> Duration {
    (deadline - Utc::now()).to_std().unwrap_or(Duration::ZERO)
}

//! Cancellable, generation-tagged timers.
//!
//! Each slot owns at most one pending tokio task. Scheduling always cancels
//! the previous task first. Firings carry the generation they were scheduled
//! under, so a message that was already queued when the slot was cancelled
//! is recognised as stale and dropped.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::runtime::SequenceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Loader → welcome.
    Loader,
    /// Welcome → hero.
    Welcome,
}

#[derive(Debug)]
pub struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            handle: None,
        }
    }

    /// Replace any pending timer with one that fires after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, events: &UnboundedSender<SequenceEvent>) {
        self.cancel();
        let kind = self.kind;
        let generation = self.generation;
        let events = events.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events
                .send(SequenceEvent::TimerFired { kind, generation })
                .is_err()
            {
                tracing::trace!(?kind, "timer fired after runtime stopped");
            }
        }));
    }

    /// Cancel the pending timer. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.generation += 1;
    }

    /// Accept a firing if it belongs to the current schedule.
    ///
    /// Returns false for stale or duplicate firings.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.handle.is_some() && generation == self.generation {
            self.handle = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

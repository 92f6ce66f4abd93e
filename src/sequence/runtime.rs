//! Single-consumer event loop around the controller.
//!
//! Every transition runs to completion inside [`SequenceRuntime::run`];
//! timers, triggers and programmatic calls are all funnelled through one
//! channel, so no two transitions ever interleave.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::config::SequenceConfig;
use crate::shutdown::ShutdownHandle;
use crate::surface::SurfaceSet;

use super::controller::{SequenceController, SequenceSnapshot};
use super::timer::TimerKind;
use super::triggers::Trigger;

const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("Sequence runtime has stopped")]
    Stopped,

    #[error("Sequence snapshot timed out")]
    Timeout,
}

#[derive(Debug)]
pub enum SequenceEvent {
    /// A timer elapsed. Tagged with the slot generation it was scheduled under.
    TimerFired { kind: TimerKind, generation: u64 },
    Trigger(Trigger),
    RevealHero,
    Close,
    Restart,
    Snapshot {
        respond_to: oneshot::Sender<SequenceSnapshot>,
    },
}

pub struct SequenceRuntime {
    controller: SequenceController,
    receiver: mpsc::UnboundedReceiver<SequenceEvent>,
    shutdown: ShutdownHandle,
}

impl SequenceRuntime {
    pub fn new(
        config: SequenceConfig,
        surfaces: SurfaceSet,
        shutdown: ShutdownHandle,
    ) -> (Self, SequenceHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let controller = SequenceController::new(config, surfaces, sender.clone());
        let runtime = Self {
            controller,
            receiver,
            shutdown,
        };
        (runtime, SequenceHandle { sender })
    }

    /// Build the runtime and run it on a tokio task.
    pub fn spawn(
        config: SequenceConfig,
        surfaces: SurfaceSet,
        shutdown: ShutdownHandle,
    ) -> (SequenceHandle, JoinHandle<()>) {
        let (runtime, handle) = Self::new(config, surfaces, shutdown);
        (handle, tokio::spawn(runtime.run()))
    }

    /// Start the sequence and process events until shutdown.
    pub async fn run(mut self) {
        self.controller.start();
        loop {
            tokio::select! {
                _ = self.shutdown.wait() => break,
                event = self.receiver.recv() => match event {
                    Some(event) => self.controller.handle_event(event),
                    None => break,
                },
            }
        }
        self.controller.shutdown();
        tracing::debug!("Sequence runtime stopped");
    }
}

/// Cloneable entry point for hosts: the programmatic re-entry points plus
/// trigger dispatch.
#[derive(Clone, Debug)]
pub struct SequenceHandle {
    sender: mpsc::UnboundedSender<SequenceEvent>,
}

impl SequenceHandle {
    pub fn reveal_hero(&self) -> Result<(), SequenceError> {
        self.send(SequenceEvent::RevealHero)
    }

    pub fn close(&self) -> Result<(), SequenceError> {
        self.send(SequenceEvent::Close)
    }

    pub fn restart(&self) -> Result<(), SequenceError> {
        self.send(SequenceEvent::Restart)
    }

    pub fn trigger(&self, trigger: Trigger) -> Result<(), SequenceError> {
        self.send(SequenceEvent::Trigger(trigger))
    }

    pub async fn snapshot(&self) -> Result<SequenceSnapshot, SequenceError> {
        let (respond_to, receiver) = oneshot::channel();
        self.send(SequenceEvent::Snapshot { respond_to })?;
        match tokio::time::timeout(SNAPSHOT_TIMEOUT, receiver).await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(_)) => Err(SequenceError::Stopped),
            Err(_) => Err(SequenceError::Timeout),
        }
    }

    fn send(&self, event: SequenceEvent) -> Result<(), SequenceError> {
        self.sender.send(event).map_err(|_| SequenceError::Stopped)
    }
}

//! External trigger registration.
//!
//! A trigger is either registered or not; registering twice never produces
//! a second listener. Controls, when present, mirror the registration.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::surface::Control;

/// User-origin signals mapped onto the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Skip the rest of the welcome overlay.
    EarlyExit,
    /// Close the hero panel (escape key, close button).
    Cancel,
    /// Run the whole sequence again.
    Restart,
}

#[derive(Debug, Default)]
pub struct TriggerRegistry {
    registered: HashSet<Trigger>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `trigger`, detaching any earlier binding on `control` first.
    pub fn register(&mut self, trigger: Trigger, control: Option<&Arc<dyn Control>>) {
        if let Some(control) = control {
            control.detach(trigger);
            control.attach(trigger);
        }
        if self.registered.insert(trigger) {
            tracing::trace!(?trigger, "trigger registered");
        }
    }

    pub fn unregister(&mut self, trigger: Trigger, control: Option<&Arc<dyn Control>>) {
        if let Some(control) = control {
            control.detach(trigger);
        }
        self.registered.remove(&trigger);
    }

    pub fn is_registered(&self, trigger: Trigger) -> bool {
        self.registered.contains(&trigger)
    }
}

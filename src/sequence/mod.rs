//! Loader → welcome → hero reveal sequence.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) for the stage machine:
//! - `state.rs` - Stage enum and sequence state
//! - `intent.rs` - Transitions (Start, WelcomeShown, HeroRevealed, ...)
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Side effects live around the reducer:
//! - `controller.rs` - Surface updates, timers, trigger routing
//! - `timer.rs` - Generation-tagged cancellable timers
//! - `resource.rs` - Lazy-load of the embedded resource
//! - `triggers.rs` - Idempotent trigger registration
//! - `runtime.rs` - Event loop and host-facing handle

pub mod controller;
pub mod intent;
pub mod reducer;
pub mod resource;
pub mod runtime;
pub mod state;
pub mod timer;
pub mod triggers;

pub use controller::{SequenceController, SequenceSnapshot};
pub use intent::SequenceIntent;
pub use reducer::SequenceReducer;
pub use resource::{ensure_resource_loaded, LoadOutcome};
pub use runtime::{SequenceError, SequenceEvent, SequenceHandle, SequenceRuntime};
pub use state::{SequenceState, Stage};
pub use timer::{TimerKind, TimerSlot};
pub use triggers::{Trigger, TriggerRegistry};

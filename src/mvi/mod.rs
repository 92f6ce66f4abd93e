//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the sequence controller.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Surfaces
//!    ↑                                 │
//!    └──── timers / triggers ──────────┘
//! ```
//!
//! - **State**: Plain-data representation of the sequence
//! - **Intent**: Transitions requested by timers, triggers or callers
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;

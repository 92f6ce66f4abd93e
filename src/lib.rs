//! Presentation sequencer: a timer-driven loader → welcome → hero reveal
//! over host-owned surfaces, with early-exit, cancel and restart triggers.

pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod mvi;
pub mod sequence;
pub mod shutdown;
pub mod surface;

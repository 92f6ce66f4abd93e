//! Sequence state: which stage is active and what the hero holds.

use serde::Serialize;

use crate::mvi::ModelState;

/// The three mutually exclusive stages of the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Loading,
    Welcome,
    Hero,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceState {
    pub stage: Stage,
    /// Hero panel currently presented. Cleared by close without rewinding `stage`.
    pub hero_open: bool,
    /// The resource surface carries a source. Reset only by close.
    pub resource_loaded: bool,
    /// Number of runs started so far.
    pub run: u64,
}

impl ModelState for SequenceState {}

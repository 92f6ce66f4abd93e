//! Intents for the reveal sequence.

use crate::mvi::Intent;

/// Intents dispatched to the sequence reducer.
///
/// These are emitted by the controller after it has applied the matching
/// side effects to the surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceIntent {
    /// A new run began: loader is up, welcome and hero are down.
    Start,

    /// Loader timer elapsed and the welcome overlay is up.
    WelcomeShown,

    /// Hero stage reached. `presented` is false when the hero surface is missing.
    HeroRevealed { presented: bool },

    /// The resource surface now carries a source.
    ResourceLoaded,

    /// Hero hidden and resource released.
    Closed,
}

impl Intent for SequenceIntent {}

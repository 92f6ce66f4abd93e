//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (early exit, cancel, restart)
/// - System events (timer expiry)
/// - Side-effect acknowledgements (resource assigned)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

//! Base trait for model state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything needed to drive the surfaces)
/// - Comparable (PartialEq for detecting changes)
pub trait ModelState: Clone + PartialEq + Default + Send + 'static {}

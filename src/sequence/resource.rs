//! Lazy assignment of the embedded resource's source.

use crate::surface::{ResourceSurface, SurfaceError};

/// What `ensure_resource_loaded` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The surface already had a source; nothing was assigned.
    AlreadyLoaded,
    /// The deferred source was assigned and the surface began loading.
    Loaded(String),
    /// No deferred source attribute carried a value.
    NothingToLoad,
}

/// Assign the deferred source to `surface` unless it already has one.
///
/// `attributes` are consulted in order; the first non-blank value wins.
/// Errors are returned as-is so the caller can record them and carry on
/// with the reveal.
pub fn ensure_resource_loaded(
    surface: &dyn ResourceSurface,
    attributes: &[String],
) -> Result<LoadOutcome, SurfaceError> {
    let current = surface.source()?;
    if current.is_some_and(|src| !src.trim().is_empty()) {
        return Ok(LoadOutcome::AlreadyLoaded);
    }

    for name in attributes {
        let Some(value) = surface.attribute(name)? else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        surface.set_source(&value)?;
        return Ok(LoadOutcome::Loaded(value));
    }

    Ok(LoadOutcome::NothingToLoad)
}

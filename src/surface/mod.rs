//! Visual surfaces the sequence controller drives.
//!
//! Surfaces and controls are owned by the host (a page, a TUI, a test) and
//! handed to the controller as shared references. The controller toggles
//! their visibility and attributes but never creates or destroys them.
//!
//! # Architecture
//!
//! ```text
//! host ──owns──→ MemorySurface / custom impl
//!                      │ Arc<dyn Surface>
//!                      ▼
//!                 SurfaceSet ──→ SequenceController
//! ```

mod memory;
mod set;

pub use memory::{MemoryControl, MemoryResourceSurface, MemorySurface};
pub use set::{SurfaceKind, SurfaceSet};

use thiserror::Error;

use crate::sequence::Trigger;

/// Errors raised by a surface while its attributes are read or written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface is no longer attached to its host.
    #[error("Surface '{surface}' is detached")]
    Detached { surface: String },

    /// An attribute could not be read or written.
    #[error("Attribute '{name}' rejected: {reason}")]
    Attribute { name: String, reason: String },
}

/// A panel whose visibility the controller toggles (loader, welcome, hero).
///
/// `show` and `hide` must be idempotent.
pub trait Surface: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
    fn add_class(&self, class: &str);
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError>;
    fn focus(&self) -> Result<(), SurfaceError>;
}

/// The display surface hosting the embedded resource.
///
/// Assigning a non-empty source makes the surface begin loading; clearing it
/// releases whatever the surface holds for rendering.
pub trait ResourceSurface: Send + Sync {
    /// Active source reference, if any.
    fn source(&self) -> Result<Option<String>, SurfaceError>;
    fn set_source(&self, url: &str) -> Result<(), SurfaceError>;
    fn clear_source(&self) -> Result<(), SurfaceError>;
    /// Declarative attribute lookup (e.g. `data-src`).
    fn attribute(&self, name: &str) -> Result<Option<String>, SurfaceError>;
}

/// A user-facing affordance that a trigger can be bound to.
pub trait Control: Send + Sync {
    fn attach(&self, trigger: Trigger);
    fn detach(&self, trigger: Trigger);
}

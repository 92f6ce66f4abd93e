//! Non-fatal diagnostics raised while sequencing.
//!
//! Nothing the controller encounters is fatal. Problems are logged through
//! `tracing` and kept in a bounded ring so hosts and tests can inspect them.

use std::collections::VecDeque;

use serde::Serialize;

use crate::surface::{SurfaceError, SurfaceKind};

const MAX_DIAGNOSTICS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A surface or control was not supplied.
    MissingSurface(SurfaceKind),
    /// The hero was revealed but no deferred source was configured.
    NothingToLoad,
    /// A surface rejected an attribute read or write.
    SurfaceFailure {
        surface: SurfaceKind,
        error: SurfaceError,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::MissingSurface(kind) if kind.is_control() => Severity::Info,
            Diagnostic::MissingSurface(_) => Severity::Warning,
            Diagnostic::NothingToLoad => Severity::Info,
            Diagnostic::SurfaceFailure { .. } => Severity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Diagnostic::MissingSurface(kind) if kind.is_control() => {
                format!("{} not found; its trigger has no affordance", kind)
            }
            Diagnostic::MissingSurface(kind) => format!("{} surface not found", kind),
            Diagnostic::NothingToLoad => {
                "No deferred source on resource surface; nothing to load".to_string()
            }
            Diagnostic::SurfaceFailure { surface, error } => {
                format!("{} surface error: {}", surface, error)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: VecDeque<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and retain a diagnostic, evicting the oldest past capacity.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => tracing::info!("{}", diagnostic.message()),
            Severity::Warning => tracing::warn!("{}", diagnostic.message()),
        }
        if self.entries.len() == MAX_DIAGNOSTICS {
            self.entries.pop_front();
        }
        self.entries.push_back(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.entries.contains(diagnostic)
    }

    pub fn missing_surfaces(&self) -> Vec<SurfaceKind> {
        let mut kinds = Vec::new();
        for entry in &self.entries {
            if let Diagnostic::MissingSurface(kind) = entry {
                if !kinds.contains(kind) {
                    kinds.push(*kind);
                }
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_controls_are_informational() {
        assert_eq!(
            Diagnostic::MissingSurface(SurfaceKind::CancelControl).severity(),
            Severity::Info
        );
        assert_eq!(
            Diagnostic::MissingSurface(SurfaceKind::Hero).severity(),
            Severity::Warning
        );
    }

    #[test]
    fn ring_is_bounded() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        for _ in 0..MAX_DIAGNOSTICS + 10 {
            diagnostics.record(Diagnostic::NothingToLoad);
        }
        assert_eq!(diagnostics.len(), MAX_DIAGNOSTICS);
    }

    #[test]
    fn missing_surfaces_are_deduplicated() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(Diagnostic::MissingSurface(SurfaceKind::Hero));
        diagnostics.record(Diagnostic::NothingToLoad);
        diagnostics.record(Diagnostic::MissingSurface(SurfaceKind::Hero));
        assert_eq!(diagnostics.missing_surfaces(), vec![SurfaceKind::Hero]);
    }
}

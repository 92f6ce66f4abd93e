use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::{Control, ResourceSurface, Surface};

/// Identifies one slot of a [`SurfaceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Loader,
    Welcome,
    Hero,
    Resource,
    EarlyExitControl,
    CancelControl,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 6] = [
        SurfaceKind::Loader,
        SurfaceKind::Welcome,
        SurfaceKind::Hero,
        SurfaceKind::Resource,
        SurfaceKind::EarlyExitControl,
        SurfaceKind::CancelControl,
    ];

    /// Controls are optional affordances; their absence is informational.
    pub fn is_control(self) -> bool {
        matches!(
            self,
            SurfaceKind::EarlyExitControl | SurfaceKind::CancelControl
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Loader => "loader",
            SurfaceKind::Welcome => "welcome",
            SurfaceKind::Hero => "hero",
            SurfaceKind::Resource => "resource",
            SurfaceKind::EarlyExitControl => "early-exit control",
            SurfaceKind::CancelControl => "cancel control",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of looking up every surface once at construction.
///
/// Absent slots are `None`; the controller skips work on them.
#[derive(Clone, Default)]
pub struct SurfaceSet {
    pub loader: Option<Arc<dyn Surface>>,
    pub welcome: Option<Arc<dyn Surface>>,
    pub hero: Option<Arc<dyn Surface>>,
    pub resource: Option<Arc<dyn ResourceSurface>>,
    pub early_exit: Option<Arc<dyn Control>>,
    pub cancel: Option<Arc<dyn Control>>,
}

impl SurfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(mut self, surface: Arc<dyn Surface>) -> Self {
        self.loader = Some(surface);
        self
    }

    pub fn with_welcome(mut self, surface: Arc<dyn Surface>) -> Self {
        self.welcome = Some(surface);
        self
    }

    pub fn with_hero(mut self, surface: Arc<dyn Surface>) -> Self {
        self.hero = Some(surface);
        self
    }

    pub fn with_resource(mut self, surface: Arc<dyn ResourceSurface>) -> Self {
        self.resource = Some(surface);
        self
    }

    pub fn with_early_exit(mut self, control: Arc<dyn Control>) -> Self {
        self.early_exit = Some(control);
        self
    }

    pub fn with_cancel(mut self, control: Arc<dyn Control>) -> Self {
        self.cancel = Some(control);
        self
    }

    pub fn is_present(&self, kind: SurfaceKind) -> bool {
        match kind {
            SurfaceKind::Loader => self.loader.is_some(),
            SurfaceKind::Welcome => self.welcome.is_some(),
            SurfaceKind::Hero => self.hero.is_some(),
            SurfaceKind::Resource => self.resource.is_some(),
            SurfaceKind::EarlyExitControl => self.early_exit.is_some(),
            SurfaceKind::CancelControl => self.cancel.is_some(),
        }
    }

    /// Slots that were not supplied, in declaration order.
    pub fn missing(&self) -> Vec<SurfaceKind> {
        SurfaceKind::ALL
            .into_iter()
            .filter(|kind| !self.is_present(*kind))
            .collect()
    }
}

impl fmt::Debug for SurfaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present: Vec<_> = SurfaceKind::ALL
            .into_iter()
            .filter(|kind| self.is_present(*kind))
            .collect();
        f.debug_struct("SurfaceSet")
            .field("present", &present)
            .finish()
    }
}

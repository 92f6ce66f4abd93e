//! In-memory surfaces for hosts without a real display and for tests.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::Mutex;

use super::{Control, ResourceSurface, Surface, SurfaceError};
use crate::sequence::Trigger;

const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Default)]
struct PanelInner {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    focus_count: u32,
    fail_focus: bool,
}

/// A panel that tracks visibility through a `hidden` class.
#[derive(Debug)]
pub struct MemorySurface {
    name: String,
    inner: Mutex<PanelInner>,
}

impl MemorySurface {
    /// Create a visible panel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(PanelInner::default()),
        }
    }

    /// Make every subsequent `focus()` fail.
    pub fn failing_focus(self) -> Self {
        self.inner.lock().fail_focus = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.lock().classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.lock().attributes.get(name).cloned()
    }

    pub fn focus_count(&self) -> u32 {
        self.inner.lock().focus_count
    }
}

impl Surface for MemorySurface {
    fn show(&self) {
        if self.inner.lock().classes.remove(HIDDEN_CLASS) {
            tracing::debug!(surface = %self.name, "shown");
        }
    }

    fn hide(&self) {
        if self.inner.lock().classes.insert(HIDDEN_CLASS.to_string()) {
            tracing::debug!(surface = %self.name, "hidden");
        }
    }

    fn is_visible(&self) -> bool {
        !self.inner.lock().classes.contains(HIDDEN_CLASS)
    }

    fn add_class(&self, class: &str) {
        self.inner.lock().classes.insert(class.to_string());
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.inner
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn focus(&self) -> Result<(), SurfaceError> {
        let mut inner = self.inner.lock();
        if inner.fail_focus {
            return Err(SurfaceError::Detached {
                surface: self.name.clone(),
            });
        }
        inner.focus_count += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FrameInner {
    source: String,
    attributes: BTreeMap<String, String>,
    loads: Vec<String>,
    failure: Option<SurfaceError>,
}

/// A resource frame that records every load it begins.
#[derive(Debug)]
pub struct MemoryResourceSurface {
    name: String,
    inner: Mutex<FrameInner>,
}

impl MemoryResourceSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(FrameInner::default()),
        }
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.inner
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Pre-set the active source, as if the host had already loaded it.
    pub fn with_source(self, url: &str) -> Self {
        self.inner.lock().source = url.to_string();
        self
    }

    /// Make every attribute read and write fail with `error`.
    pub fn failing_with(self, error: SurfaceError) -> Self {
        self.inner.lock().failure = Some(error);
        self
    }

    pub fn current_source(&self) -> String {
        self.inner.lock().source.clone()
    }

    /// Sources this frame began loading, in order.
    pub fn loads(&self) -> Vec<String> {
        self.inner.lock().loads.clone()
    }

    fn check(&self) -> Result<(), SurfaceError> {
        match &self.inner.lock().failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl ResourceSurface for MemoryResourceSurface {
    fn source(&self) -> Result<Option<String>, SurfaceError> {
        self.check()?;
        let inner = self.inner.lock();
        Ok((!inner.source.is_empty()).then(|| inner.source.clone()))
    }

    fn set_source(&self, url: &str) -> Result<(), SurfaceError> {
        self.check()?;
        let mut inner = self.inner.lock();
        inner.source = url.to_string();
        if !url.is_empty() {
            inner.loads.push(url.to_string());
            tracing::debug!(surface = %self.name, url, "begin loading");
        }
        Ok(())
    }

    fn clear_source(&self) -> Result<(), SurfaceError> {
        self.check()?;
        self.inner.lock().source.clear();
        Ok(())
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, SurfaceError> {
        self.check()?;
        Ok(self.inner.lock().attributes.get(name).cloned())
    }
}

/// A control that records attached triggers without deduplicating them.
#[derive(Debug)]
pub struct MemoryControl {
    name: String,
    attached: Mutex<Vec<Trigger>>,
}

impl MemoryControl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attached: Mutex::new(Vec::new()),
        }
    }

    pub fn attached(&self) -> Vec<Trigger> {
        self.attached.lock().clone()
    }
}

impl Control for MemoryControl {
    fn attach(&self, trigger: Trigger) {
        tracing::trace!(control = %self.name, ?trigger, "attach");
        self.attached.lock().push(trigger);
    }

    fn detach(&self, trigger: Trigger) {
        self.attached.lock().retain(|t| *t != trigger);
    }
}

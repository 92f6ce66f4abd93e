//! Shared test fixtures: in-memory surfaces and a pump for controller events.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use hero_sequencer::config::{SequenceConfig, DATA_SRC};
use hero_sequencer::sequence::{SequenceController, SequenceEvent};
use hero_sequencer::surface::{
    MemoryControl, MemoryResourceSurface, MemorySurface, Surface, SurfaceKind, SurfaceSet,
};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const SCENE_URL: &str = "https://scene.example.test/hero";

/// Every surface and control, kept around so tests can inspect them.
pub struct Fixture {
    pub loader: Arc<MemorySurface>,
    pub welcome: Arc<MemorySurface>,
    pub hero: Arc<MemorySurface>,
    pub frame: Arc<MemoryResourceSurface>,
    pub explore: Arc<MemoryControl>,
    pub exit: Arc<MemoryControl>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_frame(MemoryResourceSurface::new("frame").with_attribute(DATA_SRC, SCENE_URL))
    }

    pub fn with_frame(frame: MemoryResourceSurface) -> Self {
        Self {
            loader: Arc::new(MemorySurface::new("loader")),
            welcome: Arc::new(MemorySurface::new("welcome")),
            hero: Arc::new(MemorySurface::new("hero")),
            frame: Arc::new(frame),
            explore: Arc::new(MemoryControl::new("explore")),
            exit: Arc::new(MemoryControl::new("exit")),
        }
    }

    pub fn surfaces(&self) -> SurfaceSet {
        SurfaceSet::new()
            .with_loader(self.loader.clone())
            .with_welcome(self.welcome.clone())
            .with_hero(self.hero.clone())
            .with_resource(self.frame.clone())
            .with_early_exit(self.explore.clone())
            .with_cancel(self.exit.clone())
    }

    /// Visible panels among loader, welcome and hero.
    pub fn visible(&self) -> Vec<SurfaceKind> {
        let mut visible = Vec::new();
        if self.loader.is_visible() {
            visible.push(SurfaceKind::Loader);
        }
        if self.welcome.is_visible() {
            visible.push(SurfaceKind::Welcome);
        }
        if self.hero.is_visible() {
            visible.push(SurfaceKind::Hero);
        }
        visible
    }
}

pub fn controller(
    config: SequenceConfig,
    surfaces: SurfaceSet,
) -> (SequenceController, UnboundedReceiver<SequenceEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SequenceController::new(config, surfaces, tx), rx)
}

/// Wait for the next event (advancing paused time as needed) and apply it.
pub async fn pump(controller: &mut SequenceController, rx: &mut UnboundedReceiver<SequenceEvent>) {
    let event = rx.recv().await.expect("event channel closed");
    controller.handle_event(event);
}

/// Let spawned timer tasks run without advancing past `ms`.
pub async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Paused-clock deadlines land on millisecond ticks; allow that rounding.
pub fn assert_elapsed(started: tokio::time::Instant, ms: u64) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= Duration::from_millis(ms) && elapsed < Duration::from_millis(ms + 5),
        "expected ~{}ms, got {:?}",
        ms,
        elapsed
    );
}

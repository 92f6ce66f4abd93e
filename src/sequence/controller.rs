//! The sequence controller: loader → welcome → hero.
//!
//! Owns the sequence state, both timer slots and the trigger registry, and
//! applies every transition's side effects to the injected surfaces before
//! dispatching the matching intent to [`SequenceReducer`].

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::SequenceConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::mvi::Reducer;
use crate::surface::{Surface, SurfaceKind, SurfaceSet};

use super::intent::SequenceIntent;
use super::reducer::SequenceReducer;
use super::resource::{ensure_resource_loaded, LoadOutcome};
use super::runtime::SequenceEvent;
use super::state::{SequenceState, Stage};
use super::timer::{TimerKind, TimerSlot};
use super::triggers::{Trigger, TriggerRegistry};

const FADE_IN_CLASS: &str = "fade-in";

/// Point-in-time view of the controller, safe to hand to other tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSnapshot {
    pub stage: Stage,
    pub hero_open: bool,
    pub resource_loaded: bool,
    pub run: u64,
    pub loader_timer_pending: bool,
    pub welcome_timer_pending: bool,
    /// Panels (loader, welcome, hero) currently visible.
    pub visible: Vec<SurfaceKind>,
    pub diagnostics: usize,
}

pub struct SequenceController {
    config: SequenceConfig,
    surfaces: SurfaceSet,
    state: SequenceState,
    loader_timer: TimerSlot,
    welcome_timer: TimerSlot,
    triggers: TriggerRegistry,
    diagnostics: Diagnostics,
    events: UnboundedSender<SequenceEvent>,
}

impl SequenceController {
    /// Build a controller over `surfaces`.
    ///
    /// Missing surfaces are reported once here. Cancel and restart triggers
    /// are registered immediately; early exit waits for the welcome stage.
    /// Timers post their firings to `events`.
    pub fn new(
        config: SequenceConfig,
        surfaces: SurfaceSet,
        events: UnboundedSender<SequenceEvent>,
    ) -> Self {
        let mut diagnostics = Diagnostics::new();
        for kind in surfaces.missing() {
            diagnostics.record(Diagnostic::MissingSurface(kind));
        }

        let mut triggers = TriggerRegistry::new();
        triggers.register(Trigger::Cancel, surfaces.cancel.as_ref());
        triggers.register(Trigger::Restart, None);

        let controller = Self {
            config,
            surfaces,
            state: SequenceState::default(),
            loader_timer: TimerSlot::new(TimerKind::Loader),
            welcome_timer: TimerSlot::new(TimerKind::Welcome),
            triggers,
            diagnostics,
            events,
        };

        // Initial presentation: loader up, everything else down
        show(controller.surfaces.loader.as_ref());
        hide(controller.surfaces.welcome.as_ref());
        hide(controller.surfaces.hero.as_ref());
        controller
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    /// Begin a run: cancel any previous timer chain, show the loader and
    /// schedule the welcome overlay.
    pub fn start(&mut self) {
        self.loader_timer.cancel();
        self.welcome_timer.cancel();
        self.triggers
            .unregister(Trigger::EarlyExit, self.surfaces.early_exit.as_ref());

        show(self.surfaces.loader.as_ref());
        hide(self.surfaces.welcome.as_ref());
        hide(self.surfaces.hero.as_ref());

        self.dispatch(SequenceIntent::Start);
        self.loader_timer
            .schedule(self.config.loader_duration(), &self.events);
        tracing::info!(
            run = self.state.run,
            loader_ms = self.config.loader_duration_ms,
            welcome_ms = self.config.welcome_duration_ms,
            "Sequence started: loader -> welcome -> hero"
        );
    }

    /// Loader timer callback: hand over to the welcome overlay.
    pub fn advance_to_welcome(&mut self) {
        if self.state.stage != Stage::Loading {
            tracing::debug!(stage = ?self.state.stage, "not loading; ignoring welcome advance");
            return;
        }
        self.loader_timer.cancel();

        hide(self.surfaces.loader.as_ref());
        if let Some(welcome) = &self.surfaces.welcome {
            welcome.show();
            welcome.add_class(FADE_IN_CLASS);
        }

        self.triggers
            .register(Trigger::EarlyExit, self.surfaces.early_exit.as_ref());
        self.dispatch(SequenceIntent::WelcomeShown);
        self.welcome_timer
            .schedule(self.config.welcome_duration(), &self.events);
        tracing::info!(run = self.state.run, "Welcome shown");
    }

    /// Reveal the hero panel from any stage. Idempotent.
    ///
    /// Cancels both timers before touching surfaces so a direct call never
    /// leaves a stale firing behind.
    pub fn reveal_hero(&mut self) {
        self.loader_timer.cancel();
        self.welcome_timer.cancel();
        // Early exit belongs to the welcome stage; only start() re-arms it
        self.triggers
            .unregister(Trigger::EarlyExit, self.surfaces.early_exit.as_ref());

        hide(self.surfaces.loader.as_ref());
        hide(self.surfaces.welcome.as_ref());

        self.load_resource();

        let presented = match &self.surfaces.hero {
            Some(hero) => {
                hero.show();
                hero.add_class(FADE_IN_CLASS);
                let result = hero
                    .set_attribute("aria-hidden", "false")
                    .and_then(|()| hero.focus());
                if let Err(error) = result {
                    self.diagnostics.record(Diagnostic::SurfaceFailure {
                        surface: SurfaceKind::Hero,
                        error,
                    });
                }
                true
            }
            None => {
                self.diagnostics
                    .record(Diagnostic::MissingSurface(SurfaceKind::Hero));
                false
            }
        };

        self.dispatch(SequenceIntent::HeroRevealed { presented });
        if presented {
            tracing::info!(run = self.state.run, "Hero revealed");
        }
    }

    /// Hide the hero and release the embedded resource.
    ///
    /// Leaves timers and `stage` untouched; only `start` re-enters the sequence.
    pub fn close(&mut self) {
        hide(self.surfaces.hero.as_ref());
        if let Some(frame) = &self.surfaces.resource {
            match frame.clear_source() {
                Ok(()) => tracing::debug!("Resource source cleared on close"),
                Err(error) => self.diagnostics.record(Diagnostic::SurfaceFailure {
                    surface: SurfaceKind::Resource,
                    error,
                }),
            }
        }
        self.dispatch(SequenceIntent::Closed);
        tracing::info!(run = self.state.run, "Hero closed");
    }

    pub fn restart(&mut self) {
        tracing::debug!("Restart requested");
        self.start();
    }

    /// Route a user-origin trigger. Unregistered triggers are ignored.
    pub fn handle_trigger(&mut self, trigger: Trigger) {
        if !self.triggers.is_registered(trigger) {
            tracing::debug!(
                ?trigger,
                stage = ?self.state.stage,
                "trigger not registered; ignoring"
            );
            return;
        }
        match trigger {
            Trigger::EarlyExit => {
                tracing::info!("Early exit requested; revealing hero");
                self.reveal_hero();
            }
            Trigger::Cancel => {
                if self.state.stage == Stage::Hero && self.hero_visible() {
                    tracing::info!("Cancel requested; closing hero");
                    self.close();
                } else {
                    tracing::debug!(stage = ?self.state.stage, "hero not visible; ignoring cancel");
                }
            }
            Trigger::Restart => self.restart(),
        }
    }

    /// Accept a timer firing if it is still current.
    pub fn on_timer(&mut self, kind: TimerKind, generation: u64) {
        let slot = match kind {
            TimerKind::Loader => &mut self.loader_timer,
            TimerKind::Welcome => &mut self.welcome_timer,
        };
        if !slot.fire(generation) {
            tracing::debug!(?kind, generation, "stale timer firing dropped");
            return;
        }
        match kind {
            TimerKind::Loader => self.advance_to_welcome(),
            TimerKind::Welcome => self.reveal_hero(),
        }
    }

    /// Process one event to completion.
    pub fn handle_event(&mut self, event: SequenceEvent) {
        match event {
            SequenceEvent::TimerFired { kind, generation } => self.on_timer(kind, generation),
            SequenceEvent::Trigger(trigger) => self.handle_trigger(trigger),
            SequenceEvent::RevealHero => self.reveal_hero(),
            SequenceEvent::Close => self.close(),
            SequenceEvent::Restart => self.restart(),
            SequenceEvent::Snapshot { respond_to } => {
                if respond_to.send(self.snapshot()).is_err() {
                    tracing::trace!("Snapshot response dropped (receiver gone)");
                }
            }
        }
    }

    pub fn snapshot(&self) -> SequenceSnapshot {
        let panels = [
            (SurfaceKind::Loader, &self.surfaces.loader),
            (SurfaceKind::Welcome, &self.surfaces.welcome),
            (SurfaceKind::Hero, &self.surfaces.hero),
        ];
        let visible = panels
            .into_iter()
            .filter(|(_, surface)| matches!(surface, Some(s) if s.is_visible()))
            .map(|(kind, _)| kind)
            .collect();

        SequenceSnapshot {
            stage: self.state.stage,
            hero_open: self.state.hero_open,
            resource_loaded: self.state.resource_loaded,
            run: self.state.run,
            loader_timer_pending: self.loader_timer.is_pending(),
            welcome_timer_pending: self.welcome_timer.is_pending(),
            visible,
            diagnostics: self.diagnostics.len(),
        }
    }

    /// Cancel outstanding timers. Called when the runtime stops.
    pub fn shutdown(&mut self) {
        self.loader_timer.cancel();
        self.welcome_timer.cancel();
    }

    fn hero_visible(&self) -> bool {
        self.surfaces.hero.as_ref().is_some_and(|h| h.is_visible())
    }

    fn load_resource(&mut self) {
        let Some(frame) = &self.surfaces.resource else {
            return;
        };
        match ensure_resource_loaded(&**frame, &self.config.deferred_source_attributes) {
            Ok(LoadOutcome::Loaded(url)) => {
                tracing::info!(%url, "Lazy-loading resource");
                self.dispatch(SequenceIntent::ResourceLoaded);
            }
            Ok(LoadOutcome::AlreadyLoaded) => {
                tracing::debug!("Resource already has a source, skipping lazy-load");
                self.dispatch(SequenceIntent::ResourceLoaded);
            }
            Ok(LoadOutcome::NothingToLoad) => self.diagnostics.record(Diagnostic::NothingToLoad),
            Err(error) => self.diagnostics.record(Diagnostic::SurfaceFailure {
                surface: SurfaceKind::Resource,
                error,
            }),
        }
    }

    fn dispatch(&mut self, intent: SequenceIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = SequenceReducer::reduce(state, intent);
    }
}

fn show(surface: Option<&Arc<dyn Surface>>) {
    if let Some(surface) = surface {
        surface.show();
    }
}

fn hide(surface: Option<&Arc<dyn Surface>>) {
    if let Some(surface) = surface {
        surface.hide();
    }
}

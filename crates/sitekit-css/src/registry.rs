//! Engine discovery.
//!
//! Availability is a fact about the machine, so each engine is probed once
//! when a registry is built and the answer is kept for the registry's life.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use sitekit_core::config::CssConfig;
use tracing::{info, warn};

use crate::{
    backend::{BackendKind, StylesheetBackend},
    lightning::LightningBackend,
    stylus::StylusBackend,
};

static GLOBAL: OnceCell<BackendRegistry> = OnceCell::new();

#[derive(Debug, Clone)]
struct Slot {
    backend: Arc<dyn StylesheetBackend>,
    available: bool,
}

/// The set of known engines and whether each one was found.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    slots: Vec<Slot>,
}

impl BackendRegistry {
    /// A registry with no engines; every backend is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probe the configured engines and record what was found.
    pub fn discover(config: &CssConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(LightningBackend::new(&config.native_program)));
        registry.register(Arc::new(StylusBackend::new(&config.stylus_program)));

        for slot in &registry.slots {
            let kind = slot.backend.kind();
            let engine = slot.backend.engine();
            if slot.available {
                info!(%kind, engine, "stylesheet engine available");
            } else {
                warn!(%kind, engine, "stylesheet engine not found");
            }
        }

        registry
    }

    /// The process-wide registry, discovered with default engine names on
    /// first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::discover(&CssConfig::default()))
    }

    /// Install `registry` as the process-wide one.
    ///
    /// Returns the registry back if discovery already happened.
    pub fn install_global(registry: Self) -> std::result::Result<(), Self> {
        GLOBAL.set(registry)
    }

    /// Probe `backend` and add it, replacing any engine of the same kind.
    pub fn register(&mut self, backend: Arc<dyn StylesheetBackend>) {
        let available = backend.probe();
        self.insert(backend, available);
    }

    /// Add `backend` with a known availability, skipping the probe.
    pub fn with_backend(mut self, backend: Arc<dyn StylesheetBackend>, available: bool) -> Self {
        self.insert(backend, available);
        self
    }

    fn insert(&mut self, backend: Arc<dyn StylesheetBackend>, available: bool) {
        let slot = Slot { backend, available };
        match self
            .slots
            .iter_mut()
            .find(|s| s.backend.kind() == slot.backend.kind())
        {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    /// Whether the engine for `kind` was found.
    pub fn is_available(&self, kind: BackendKind) -> bool {
        self.slot(kind).is_some_and(|s| s.available)
    }

    /// The engine registered for `kind`, found or not.
    pub fn get(&self, kind: BackendKind) -> Option<&Arc<dyn StylesheetBackend>> {
        self.slot(kind).map(|s| &s.backend)
    }

    /// Every registered engine with its availability, in registration order.
    pub fn engines(&self) -> impl Iterator<Item = (&dyn StylesheetBackend, bool)> {
        self.slots.iter().map(|s| (s.backend.as_ref(), s.available))
    }

    /// Kinds whose engine was found.
    pub fn available(&self) -> Vec<BackendKind> {
        self.slots
            .iter()
            .filter(|s| s.available)
            .map(|s| s.backend.kind())
            .collect()
    }

    fn slot(&self, kind: BackendKind) -> Option<&Slot> {
        self.slots.iter().find(|s| s.backend.kind() == kind)
    }
}

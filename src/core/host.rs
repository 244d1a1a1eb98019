use crate::domain::model::ImplementorMap;
use crate::domain::ports::Registrar;
use std::sync::Arc;

/// Owns the registrar binding and the single pending hand-off slot.
///
/// A published mapping goes to exactly one place: the bound registrar if
/// one exists, the pending slot otherwise. The slot replaces on write, so
/// when several loads run before a registrar is bound only the last
/// mapping survives. Binding a registrar drains the slot exactly once.
///
/// The context itself is single-threaded; hosts that share it across
/// threads wrap it in a mutex (see `ScanPipeline`).
#[derive(Default)]
pub struct HostContext {
    registrar: Option<Arc<dyn Registrar>>,
    pending: Option<ImplementorMap>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registrar(registrar: Arc<dyn Registrar>) -> Self {
        Self {
            registrar: Some(registrar),
            pending: None,
        }
    }

    /// Hands `map` off: dispatch to the registrar when bound, otherwise
    /// park it in the pending slot. Never both, never an error.
    pub fn publish(&mut self, map: ImplementorMap) {
        match &self.registrar {
            Some(registrar) => registrar.register(map),
            None => {
                if self.pending.is_some() {
                    tracing::warn!(
                        "no registrar bound yet; replacing pending mapping (previous one is lost)"
                    );
                }
                self.pending = Some(map);
            }
        }
    }

    /// Binds the registrar and forwards any parked mapping to it. The
    /// slot is drained at most once.
    pub fn bind_registrar(&mut self, registrar: Arc<dyn Registrar>) {
        if let Some(map) = self.pending.take() {
            tracing::debug!(crates = map.len(), "draining pending mapping into registrar");
            registrar.register(map);
        }
        self.registrar = Some(registrar);
    }

    /// Removes and returns the parked mapping, for hosts that drain the
    /// slot themselves instead of binding a registrar.
    pub fn take_pending(&mut self) -> Option<ImplementorMap> {
        self.pending.take()
    }

    pub fn has_registrar(&self) -> bool {
        self.registrar.is_some()
    }

    pub fn pending(&self) -> Option<&ImplementorMap> {
        self.pending.as_ref()
    }
}

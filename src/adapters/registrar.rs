use crate::domain::model::ImplementorMap;
use crate::domain::ports::Registrar;
use std::sync::Mutex;

/// Registrar that only logs what it receives. The CLI binds this so every
/// scanned mapping takes the hook-present path.
#[derive(Debug, Default)]
pub struct LoggingRegistrar;

impl Registrar for LoggingRegistrar {
    fn register(&self, map: ImplementorMap) {
        tracing::info!(
            "registered mapping: {} crates, {} implementors",
            map.len(),
            map.implementor_count()
        );
        for (crate_name, descriptors) in map.iter() {
            tracing::debug!("  {}: {} implementors", crate_name, descriptors.len());
        }
    }
}

/// Registrar that keeps every registered mapping, in order.
#[derive(Debug, Default)]
pub struct CollectingRegistrar {
    maps: Mutex<Vec<ImplementorMap>>,
}

impl CollectingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collected(&self) -> Vec<ImplementorMap> {
        self.maps.lock().expect("registrar lock poisoned").clone()
    }
}

impl Registrar for CollectingRegistrar {
    fn register(&self, map: ImplementorMap) {
        self.maps.lock().expect("registrar lock poisoned").push(map);
    }
}

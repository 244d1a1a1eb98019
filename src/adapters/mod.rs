// Adapters layer: concrete implementations for external systems (storage,
// http, registrar hosts).

pub mod local;
pub mod registrar;
pub mod remote;

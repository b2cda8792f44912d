use crate::relay::Relay;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once before the listener binds; never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

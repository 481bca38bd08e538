//! Shared state injected into the HTTP handlers.

use registra_store::SharedStore;

/// Dependencies shared by every handler invocation.
///
/// Handlers are stateless per request; the store handle is reused across
/// invocations purely for efficiency.
pub struct ApiState {
    /// Record store backing both handler surfaces.
    pub store: SharedStore,
    /// Name of the secondary index used for email lookups.
    pub email_index: String,
}

impl ApiState {
    /// Bundle the store handle with the configured index name.
    #[must_use]
    pub fn new(store: SharedStore, email_index: impl Into<String>) -> Self {
        Self {
            store,
            email_index: email_index.into(),
        }
    }
}

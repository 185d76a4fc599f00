pub mod audit;
pub mod auth;
pub mod config;
pub mod fallback;
pub mod store;

pub use fallback::{bounded_get, bounded_listen, BoundedStream, FetchOutcome};
pub use store::{Listener, ListenerGuard, Query};

use audit::AuditLog;
use auth::AuthClient;
use store::StoreClient;

/// Handle bundling the backend-service clients.
///
/// Created once at startup and handed to the UI through context; pages and
/// hooks receive it explicitly rather than reaching for ambient globals.
#[derive(Clone)]
pub struct Backend {
    pub auth: AuthClient,
    pub store: StoreClient,
    pub audit: AuditLog,
}

impl Backend {
    /// Build clients from environment credentials (see [`config`]).
    pub fn from_env() -> Self {
        let config = config::load();
        let store = StoreClient::new(config);
        Self {
            auth: AuthClient::new(config),
            audit: AuditLog::new(store.clone()),
            store,
        }
    }
}

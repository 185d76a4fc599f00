use std::sync::OnceLock;

/// Credentials and endpoints for the backend-as-a-service.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub project_id: String,
    pub api_key: String,
    /// Base URL of the identity provider (`accounts:*` operations).
    pub identity_url: String,
    /// Base URL of the document store.
    pub store_url: String,
}

static CONFIG: OnceLock<BackendConfig> = OnceLock::new();

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        eprintln!("[config] {key} not set, using {default}");
        default.to_string()
    })
}

/// Load backend credentials from the environment (plus `.env` via dotenvy).
/// Safe to call multiple times; only the first call has effect.
pub fn load() -> &'static BackendConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        BackendConfig {
            project_id: env_or("POWERGYM_PROJECT_ID", "powergym-dev"),
            api_key: env_or("POWERGYM_API_KEY", "dev-key"),
            identity_url: env_or("POWERGYM_IDENTITY_URL", "http://localhost:9099"),
            store_url: env_or("POWERGYM_STORE_URL", "http://localhost:8080"),
        }
    })
}

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_types::{AppError, Principal};
use tokio::sync::watch;

use crate::config::BackendConfig;

/// Tokens for the signed-in session, kept client-side only.
#[derive(Debug, Clone)]
pub struct Session {
    pub id_token: String,
    pub refresh_token: String,
}

struct AuthShared {
    /// Auth-state stream. The initial value is the initial emission
    /// ("no user"); every sign-in/sign-out publishes a new value.
    principal: watch::Sender<Option<Principal>>,
    session: Mutex<Option<Session>>,
}

/// Client for the identity provider.
///
/// Holds the auth-state stream: consumers call [`AuthClient::subscribe`] for
/// a receiver and observe every identity transition. There is no error
/// channel on the stream; a provider failure is indistinguishable from
/// "no user".
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: &'static BackendConfig,
    shared: Arc<AuthShared>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Deserialize)]
struct IdentityErrorResponse {
    error: IdentityErrorBody,
}

#[derive(Deserialize)]
struct IdentityErrorBody {
    message: String,
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Serialize)]
struct ProfileUpdate<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
    #[serde(rename = "displayName")]
    display_name: &'a str,
}

impl AuthClient {
    pub fn new(config: &'static BackendConfig) -> Self {
        let (principal, _) = watch::channel(None);
        Self {
            http: reqwest::Client::new(),
            config,
            shared: Arc::new(AuthShared {
                principal,
                session: Mutex::new(None),
            }),
        }
    }

    /// Subscribe to auth-state transitions. The receiver's current value is
    /// the latest emission; dropping the receiver detaches the listener.
    pub fn subscribe(&self) -> watch::Receiver<Option<Principal>> {
        self.shared.principal.subscribe()
    }

    /// The currently signed-in principal, if any.
    pub fn current_user(&self) -> Option<Principal> {
        self.shared.principal.borrow().clone()
    }

    async fn post_identity<R: DeserializeOwned>(
        &self,
        operation: &str,
        body: &impl Serialize,
    ) -> Result<R, AppError> {
        let url = format!(
            "{}/v1/accounts:{operation}?key={}",
            self.config.identity_url, self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::backend(format!("identity request failed: {e}")))?;

        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| AppError::backend(format!("malformed identity response: {e}")));
        }

        // Failure payloads carry a provider error code, sometimes with a
        // colon-separated detail suffix.
        match response.json::<IdentityErrorResponse>().await {
            Ok(err) => {
                let code = err
                    .error
                    .message
                    .split(':')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                Err(AppError::from_provider_code(&code))
            }
            Err(e) => Err(AppError::backend(format!(
                "identity provider returned an unreadable error: {e}"
            ))),
        }
    }

    fn publish(&self, principal: Option<Principal>, session: Option<Session>) {
        {
            let mut guard = self
                .shared
                .session
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = session;
        }
        self.shared.principal.send_replace(principal);
    }

    /// Sign in with email and password. On success the auth-state stream
    /// emits the new principal; bad credentials surface as
    /// `AppError::unauthorized` and are never retried here.
    pub async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AppError> {
        let response: IdentityResponse = self
            .post_identity(
                "signInWithPassword",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let principal = Principal {
            id: response.local_id,
            email: response.email,
            display_name: response.display_name,
        };
        self.publish(
            Some(principal.clone()),
            Some(Session {
                id_token: response.id_token,
                refresh_token: response.refresh_token,
            }),
        );
        Ok(principal)
    }

    /// Create an account, set its display name, and sign it in.
    pub async fn create_user_with_email_password(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Principal, AppError> {
        let created: IdentityResponse = self
            .post_identity(
                "signUp",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        // Profile update is best-effort: the account exists either way, and
        // the principal below carries the intended name locally.
        let update: Result<serde_json::Value, AppError> = self
            .post_identity(
                "update",
                &ProfileUpdate {
                    id_token: &created.id_token,
                    display_name,
                },
            )
            .await;
        if let Err(err) = update {
            tracing::warn!(error = %err, "failed to set display name on signup");
        }

        let principal = Principal {
            id: created.local_id,
            email: created.email,
            display_name: display_name.to_string(),
        };
        self.publish(
            Some(principal.clone()),
            Some(Session {
                id_token: created.id_token,
                refresh_token: created.refresh_token,
            }),
        );
        Ok(principal)
    }

    /// Sign out: clears the local session and emits `None` on the stream.
    pub fn sign_out(&self) {
        self.publish(None, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use std::sync::OnceLock;

    fn test_config() -> &'static BackendConfig {
        static CONFIG: OnceLock<BackendConfig> = OnceLock::new();
        CONFIG.get_or_init(|| BackendConfig {
            project_id: "powergym-test".into(),
            api_key: "test-key".into(),
            identity_url: "http://localhost:9099".into(),
            store_url: "http://localhost:8080".into(),
        })
    }

    #[tokio::test]
    async fn stream_initial_emission_is_no_user() {
        let client = AuthClient::new(test_config());
        let rx = client.subscribe();
        assert!(rx.borrow().is_none());
        assert!(client.current_user().is_none());
    }

    #[tokio::test]
    async fn sign_out_emits_none() {
        let client = AuthClient::new(test_config());
        let mut rx = client.subscribe();

        // Simulate a signed-in session, then sign out.
        client.publish(
            Some(Principal {
                id: "uid-1".into(),
                email: "john@example.com".into(),
                display_name: "John".into(),
            }),
            None,
        );
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());

        client.sign_out();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn same_email_always_derives_same_role() {
        let p1 = Principal {
            id: "a".into(),
            email: "admin@powergym.com".into(),
            display_name: String::new(),
        };
        let p2 = Principal {
            id: "b".into(),
            email: "admin@powergym.com".into(),
            display_name: "Other Session".into(),
        };
        assert_eq!(p1.role(), p2.role());
    }
}

use dioxus::prelude::*;

mod auth;
mod components;
mod fallback_data;
mod fetch;
mod guard;
mod routes;

use auth::{use_auth, AuthState};
use backend::Backend;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Backend clients are built once and passed down via context so pages
    // receive an explicit handle instead of reaching for globals.
    let backend = use_context_provider(Backend::from_env);
    use_context_provider(AuthState::new);
    let mut auth = use_auth();

    // Session resolver: exactly one listener on the identity provider's
    // auth-state stream for the app lifetime. The receiver is dropped with
    // this scope, releasing the registration on every exit path.
    use_coroutine(move |_: UnboundedReceiver<()>| {
        let mut stream = backend.auth.subscribe();
        async move {
            loop {
                let current = stream.borrow_and_update().clone();
                auth.apply(current);
                if stream.changed().await.is_err() {
                    // Provider dropped; no further emissions will arrive.
                    break;
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        components::toast::ToastProvider {
            Router::<Route> {}
        }
    }
}

use backend::Backend;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use std::collections::HashMap;
use validator::Validate;

use crate::components::{use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::routes::Route;

/// Admin sign-in. Any account can authenticate here; the route guard sends
/// non-admin principals to the member subtree afterward.
#[component]
pub fn AdminLoginPage() -> Element {
    let backend = use_context::<Backend>();
    let mut toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let backend = backend.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                email: email(),
                password: password(),
            };
            if let Err(errors) = request.validate() {
                field_errors.set(AppError::from(errors).field_errors);
                loading.set(false);
                return;
            }

            match backend
                .auth
                .sign_in_with_email_password(&request.email, &request.password)
                .await
            {
                Ok(principal) => {
                    backend
                        .audit
                        .info("admin_login", serde_json::json!({ "user": principal.id }));
                    toast.success("Welcome back!");
                    navigator().push(Route::AdminDashboard {});
                }
                Err(err) => {
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Admin Login" }
                    CardDescription { "Sign in with an administrator account" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: handle_login,
                        div { class: "form-field",
                            label { r#for: "email", "Email" }
                            input {
                                r#type: "email",
                                id: "email",
                                placeholder: "admin@powergym.com",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                p { class: "field-error", "{err}" }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "password", "Password" }
                            input {
                                r#type: "password",
                                id: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                p { class: "field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button button-primary button-block",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                    p { class: "auth-link",
                        "Not an admin? "
                        Link { to: Route::MemberLogin {}, "Member login" }
                    }
                }
            }
        }
    }
}

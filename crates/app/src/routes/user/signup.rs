use backend::Backend;
use dioxus::prelude::*;
use shared_types::{AppError, SignupRequest};
use std::collections::HashMap;
use validator::Validate;

use crate::components::{use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::routes::Route;

/// Visitor signup: creates an account and returns to the browse page. The
/// member profile document is created later, the first time the member
/// dashboard resolves the principal.
#[component]
pub fn UserSignupPage() -> Element {
    let backend = use_context::<Backend>();
    let mut toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        let backend = backend.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = SignupRequest {
                name: name(),
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
                .create_user_with_email_password(&request.email, &request.password, &request.name)
                .await
            {
                Ok(principal) => {
                    backend
                        .audit
                        .info("user_registered", serde_json::json!({ "user": principal.id }));
                    toast.success("Account created!");
                    navigator().push(Route::UserDashboard {});
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
                    CardTitle { "Create Account" }
                    CardDescription { "Sign up to get started with PowerGYM" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { onsubmit: handle_signup,
                        div { class: "form-field",
                            label { r#for: "name", "Full Name" }
                            input {
                                id: "name",
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("name") {
                                p { class: "field-error", "{err}" }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "email", "Email Address" }
                            input {
                                r#type: "email",
                                id: "email",
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
                                placeholder: "At least 6 characters",
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
                            if loading() { "Creating Account..." } else { "Sign Up" }
                        }
                    }
                }
            }
        }
    }
}

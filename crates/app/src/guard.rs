use dioxus::prelude::*;
use shared_types::{decide, GuardDecision, RequiredRole};

use crate::auth::use_auth;
use crate::routes::Route;

/// Layout guard for the `/admin` subtree.
#[component]
pub fn AdminGuard() -> Element {
    guard_outlet(RequiredRole::Admin)
}

/// Layout guard for the `/member` subtree. Admins are admitted too.
#[component]
pub fn MemberGuard() -> Element {
    guard_outlet(RequiredRole::Member)
}

/// Evaluate the decision table against the current snapshot and render the
/// matching branch. Evaluated synchronously on every navigation.
fn guard_outlet(required: RequiredRole) -> Element {
    let auth = use_auth();
    let loading = (auth.loading)();
    let user = auth.current_user.read();

    match decide(loading, user.as_ref(), required) {
        GuardDecision::Placeholder => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::RedirectToLanding => {
            navigator().replace(Route::Index {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::RedirectToMemberHome => {
            navigator().replace(Route::MemberDashboard {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::Admit => rsx! { Outlet::<Route> {} },
    }
}

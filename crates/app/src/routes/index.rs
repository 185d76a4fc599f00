use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDumbbell, LdShieldCheck, LdUser, LdUsers};
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Public landing page: portal selector.
#[component]
pub fn Index() -> Element {
    rsx! {
        div { class: "landing",
            div { class: "landing-hero",
                span { class: "landing-logo",
                    Icon::<LdDumbbell> { icon: LdDumbbell, width: 40, height: 40 }
                }
                h1 { "Power" span { class: "accent", "GYM" } }
                p { "Train hard. We handle the paperwork." }
            }

            div { class: "landing-portals",
                Link { to: Route::AdminLogin {}, class: "portal-card",
                    Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 28, height: 28 }
                    h3 { "Admin Portal" }
                    p { "Manage members, bills, packages and inventory." }
                }
                Link { to: Route::MemberLogin {}, class: "portal-card",
                    Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 }
                    h3 { "Member Portal" }
                    p { "View your membership, receipts and notifications." }
                }
                Link { to: Route::UserDashboard {}, class: "portal-card",
                    Icon::<LdUser> { icon: LdUser, width: 28, height: 28 }
                    h3 { "Browse as Guest" }
                    p { "Explore packages and the supplement store." }
                }
            }
        }
    }
}

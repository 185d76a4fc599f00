use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        div { class: "landing",
            div { class: "landing-hero",
                h1 { "404" }
                p { "No page at /{path}." }
                Link { to: Route::Index {}, class: "button button-primary", "Back to PowerGYM" }
            }
        }
    }
}

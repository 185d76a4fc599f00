use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPackage, LdSearch, LdShoppingBag};
use dioxus_free_icons::Icon;

use crate::components::{Badge, Card, CardContent, DashboardShell, Portal, Tone};
use crate::fallback_data::fallback_supplements;

fn category_tone(category: &str) -> Tone {
    match category {
        "Protein" => Tone::Primary,
        "Performance" => Tone::Warning,
        "Recovery" => Tone::Success,
        _ => Tone::Default,
    }
}

/// Supplement store inventory with a text search filter.
#[component]
pub fn SupplementsPage() -> Element {
    let mut search_query = use_signal(String::new);

    let supplements: Vec<_> = fallback_supplements()
        .into_iter()
        .filter(|s| s.matches(&search_query()))
        .collect();

    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header page-header-row",
                    div {
                        h1 {
                            Icon::<LdShoppingBag> { icon: LdShoppingBag, width: 26, height: 26 }
                            "Supplement Store"
                        }
                        p { "Manage supplements inventory" }
                    }
                    div { class: "search-box",
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        input {
                            placeholder: "Search supplements...",
                            value: "{search_query}",
                            oninput: move |e| search_query.set(e.value()),
                        }
                    }
                }

                div { class: "card-grid",
                    for supplement in supplements {
                        Card { class: "supplement-card".to_string(),
                            div { class: "supplement-image",
                                if let Some(url) = supplement.image.as_ref() {
                                    img { src: "{url}", alt: "{supplement.name}" }
                                } else {
                                    Icon::<LdPackage> { icon: LdPackage, width: 32, height: 32 }
                                }
                            }
                            CardContent {
                                div { class: "supplement-head",
                                    h3 { "{supplement.name}" }
                                    Badge { tone: category_tone(&supplement.category), "{supplement.category}" }
                                }
                                p { class: "muted", "{supplement.description}" }
                                div { class: "supplement-foot",
                                    span { class: "cell-strong", "₹{supplement.price}" }
                                    span { class: "muted", "{supplement.stock} in stock" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

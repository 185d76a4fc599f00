use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdIndianRupee};
use dioxus_free_icons::Icon;

use crate::components::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DashboardShell, Portal, Tone};
use crate::fallback_data::fallback_packages;

/// Fee packages grid.
#[component]
pub fn PackagesPage() -> Element {
    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Fee Packages" }
                    p { "Manage membership packages and pricing" }
                }

                div { class: "card-grid",
                    for (index, pkg) in fallback_packages().into_iter().enumerate() {
                        Card { class: if index == 2 { "package-card package-popular".to_string() } else { "package-card".to_string() },
                            if index == 2 {
                                div { class: "package-popular-badge",
                                    Badge { tone: Tone::Primary, "Popular" }
                                }
                            }
                            CardHeader {
                                CardTitle { "{pkg.name}" }
                                CardDescription {
                                    if pkg.duration_months == 1 { "1 month membership" } else { "{pkg.duration_months} months membership" }
                                }
                            }
                            CardContent {
                                div { class: "package-price",
                                    Icon::<LdIndianRupee> { icon: LdIndianRupee, width: 22, height: 22 }
                                    span { "{pkg.price}" }
                                }
                                ul { class: "feature-list",
                                    for feature in pkg.features.iter() {
                                        li {
                                            Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                            "{feature}"
                                        }
                                    }
                                }
                                button { class: "button button-block", "Edit Package" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDumbbell, LdPackage, LdSearch, LdUsers};
use dioxus_free_icons::Icon;

use crate::components::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DashboardShell, Portal, Tone};
use crate::fallback_data::{fallback_packages, fallback_supplements};
use crate::routes::Route;

/// Public browse page; no principal required by design.
#[component]
pub fn UserDashboardPage() -> Element {
    let mut search_query = use_signal(String::new);

    let query = search_query();
    let packages: Vec<_> = fallback_packages()
        .into_iter()
        .filter(|pkg| {
            let q = query.to_lowercase();
            pkg.name.to_lowercase().contains(&q)
                || pkg.features.iter().any(|f| f.to_lowercase().contains(&q))
        })
        .collect();
    let supplements: Vec<_> = fallback_supplements()
        .into_iter()
        .filter(|s| s.matches(&query))
        .collect();
    let package_count = packages.len();
    let supplement_count = supplements.len();

    rsx! {
        DashboardShell { portal: Portal::Visitor,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Welcome to PowerGYM! 💪" }
                    p { "Explore our packages and supplements" }
                }

                Card {
                    CardContent {
                        div { class: "search-box search-box-wide",
                            Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                            input {
                                placeholder: "Search packages or supplements...",
                                value: "{search_query}",
                                oninput: move |e| search_query.set(e.value()),
                            }
                        }
                    }
                }

                div { class: "stats-grid stats-grid-3",
                    div { class: "stats-card", "data-tone": "primary",
                        div { class: "stats-card-icon",
                            Icon::<LdPackage> { icon: LdPackage, width: 22, height: 22 }
                        }
                        div { class: "stats-card-body",
                            p { class: "stats-card-value", "{package_count}" }
                            p { class: "stats-card-title", "Packages Found" }
                        }
                    }
                    div { class: "stats-card", "data-tone": "success",
                        div { class: "stats-card-icon",
                            Icon::<LdDumbbell> { icon: LdDumbbell, width: 22, height: 22 }
                        }
                        div { class: "stats-card-body",
                            p { class: "stats-card-value", "{supplement_count}" }
                            p { class: "stats-card-title", "Supplements Found" }
                        }
                    }
                    div { class: "stats-card", "data-tone": "warning",
                        div { class: "stats-card-icon",
                            Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 }
                        }
                        div { class: "stats-card-body",
                            p { class: "stats-card-value", "12" }
                            p { class: "stats-card-title", "Certified Trainers" }
                        }
                    }
                }

                h2 { class: "section-title", "Membership Packages" }
                div { class: "card-grid",
                    for pkg in packages {
                        Card {
                            CardHeader {
                                CardTitle { "{pkg.name}" }
                                CardDescription {
                                    if pkg.duration_months == 1 { "1 month" } else { "{pkg.duration_months} months" }
                                }
                            }
                            CardContent {
                                div { class: "package-price", span { "₹{pkg.price}" } }
                                Link { to: Route::MemberSignup {}, class: "button button-primary button-block", "Join Now" }
                            }
                        }
                    }
                }

                h2 { class: "section-title", "Supplement Store" }
                div { class: "card-grid",
                    for supplement in supplements {
                        Card {
                            CardContent {
                                div { class: "supplement-head",
                                    h3 { "{supplement.name}" }
                                    Badge { tone: Tone::Default, "{supplement.category}" }
                                }
                                p { class: "muted", "{supplement.description}" }
                                span { class: "cell-strong", "₹{supplement.price}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

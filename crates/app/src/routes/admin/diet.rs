use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFlame, LdUtensils};
use dioxus_free_icons::Icon;

use crate::components::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DashboardShell, Portal, Tone};
use crate::fallback_data::fallback_diet_plans;

/// Nutrition plans with their meal schedules.
#[component]
pub fn DietPage() -> Element {
    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 {
                        Icon::<LdUtensils> { icon: LdUtensils, width: 26, height: 26 }
                        "Diet Plans"
                    }
                    p { "Nutrition plans for members" }
                }

                div { class: "two-col",
                    for plan in fallback_diet_plans() {
                        Card {
                            CardHeader {
                                div { class: "diet-head",
                                    div {
                                        CardTitle { "{plan.name}" }
                                        CardDescription { "{plan.description}" }
                                    }
                                    span { class: "diet-calories",
                                        Icon::<LdFlame> { icon: LdFlame, width: 18, height: 18 }
                                        "{plan.calories} cal"
                                    }
                                }
                            }
                            CardContent {
                                for meal in plan.meals.iter() {
                                    div { class: "meal-row",
                                        span { class: "meal-time",
                                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                            "{meal.time}"
                                        }
                                        div {
                                            h4 { "{meal.name}" }
                                            div { class: "meal-items",
                                                for item in meal.items.iter() {
                                                    Badge { tone: Tone::Default, "{item}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdReceipt, LdUsers};
use dioxus_free_icons::Icon;

use crate::components::{Card, CardContent, CardDescription, CardHeader, CardTitle, DashboardShell, Portal};
use crate::fallback_data::{fallback_bills, fallback_members};

/// Record-count summaries for the exportable datasets.
#[component]
pub fn ReportsPage() -> Element {
    let member_count = fallback_members().len();
    let bill_count = fallback_bills().len();
    let today = Utc::now().format("%b %d, %Y").to_string();

    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Reports" }
                    p { "Data summaries for analysis and record keeping." }
                }

                div { class: "two-col",
                    Card {
                        CardHeader {
                            div { class: "report-head",
                                Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 }
                                div {
                                    CardTitle { "Members Report" }
                                    CardDescription { "Full member list with status and details" }
                                }
                            }
                        }
                        CardContent {
                            div { class: "report-row",
                                span { class: "muted", "Total Records" }
                                span { class: "cell-strong", "{member_count}" }
                            }
                            div { class: "report-row",
                                span { class: "muted", "Last Updated" }
                                span { class: "cell-strong", "{today}" }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            div { class: "report-head",
                                Icon::<LdReceipt> { icon: LdReceipt, width: 22, height: 22 }
                                div {
                                    CardTitle { "Bills Report" }
                                    CardDescription { "All payment receipts with status" }
                                }
                            }
                        }
                        CardContent {
                            div { class: "report-row",
                                span { class: "muted", "Total Records" }
                                span { class: "cell-strong", "{bill_count}" }
                            }
                            div { class: "report-row",
                                span { class: "muted", "Last Updated" }
                                span { class: "cell-strong", "{today}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

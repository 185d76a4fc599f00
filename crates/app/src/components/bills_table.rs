use dioxus::prelude::*;
use shared_types::{Bill, BillStatus};

use super::ui::{Badge, Card, CardContent, Skeleton, Tone};

fn status_tone(status: BillStatus) -> Tone {
    match status {
        BillStatus::Paid => Tone::Success,
        BillStatus::Pending => Tone::Warning,
        BillStatus::Overdue => Tone::Destructive,
    }
}

/// Bill receipts table. `show_actions: false` renders the read-only member
/// view without the create button.
#[component]
pub fn BillsTable(
    bills: Vec<Bill>,
    loading: bool,
    #[props(default = true)] show_actions: bool,
    #[props(default)] on_create: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        Card {
            CardContent {
                if show_actions {
                    div { class: "table-toolbar",
                        button {
                            class: "button button-primary",
                            onclick: move |_| {
                                if let Some(handler) = &on_create {
                                    handler.call(());
                                }
                            },
                            "Create Bill"
                        }
                    }
                }
                if loading {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Member" }
                                th { "Package" }
                                th { "Amount" }
                                th { "Paid" }
                                th { "Due" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for bill in bills {
                                tr { key: "{bill.id}",
                                    td { class: "cell-strong", "{bill.member_name}" }
                                    td { "{bill.package_name}" }
                                    td { "₹{bill.amount}" }
                                    td { {bill.paid_date.format("%b %d, %Y").to_string()} }
                                    td { {bill.due_date.format("%b %d, %Y").to_string()} }
                                    td {
                                        Badge { tone: status_tone(bill.status), "{bill.status.as_str()}" }
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

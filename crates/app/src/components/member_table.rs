use dioxus::prelude::*;
use shared_types::{Member, MemberStatus};

use super::ui::{Badge, Card, CardContent, Skeleton, Tone};

fn status_tone(status: MemberStatus) -> Tone {
    match status {
        MemberStatus::Active => Tone::Success,
        MemberStatus::Inactive => Tone::Warning,
        MemberStatus::Expired => Tone::Destructive,
    }
}

/// Member roster with add/delete actions.
#[component]
pub fn MemberTable(
    members: Vec<Member>,
    loading: bool,
    on_add: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "table-toolbar",
                    button { class: "button button-primary", onclick: move |_| on_add.call(()), "Add Member" }
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
                                th { "Name" }
                                th { "Email" }
                                th { "Phone" }
                                th { "Joined" }
                                th { "Package" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for member in members {
                                tr { key: "{member.id}",
                                    td { class: "cell-strong", "{member.name}" }
                                    td { "{member.email}" }
                                    td { "{member.phone}" }
                                    td { {member.join_date.format("%b %d, %Y").to_string()} }
                                    td { "{member.package_id}" }
                                    td {
                                        Badge { tone: status_tone(member.status), "{member.status.as_str()}" }
                                    }
                                    td {
                                        button {
                                            class: "button button-ghost-destructive",
                                            onclick: {
                                                let id = member.id.clone();
                                                move |_| on_delete.call(id.clone())
                                            },
                                            "Delete"
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

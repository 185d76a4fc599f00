use std::time::Duration;

use backend::store::collections;
use backend::{bounded_listen, Backend, Query};
use dioxus::prelude::*;
use shared_types::{Member, NewMember};

use crate::components::dialogs::AddMemberDialog;
use crate::components::member_table::MemberTable;
use crate::components::{use_toast, DashboardShell, Portal};
use crate::fallback_data::fallback_members;
use crate::fetch::use_bounded_listen;

/// Bound on how long the roster may stay blank before the static dataset is
/// substituted.
const FETCH_BOUND: Duration = Duration::from_millis(1500);

/// Member roster backed by a live subscription to the `members` collection.
#[component]
pub fn MembersPage() -> Element {
    let backend = use_context::<Backend>();
    let toast = use_toast();
    let mut show_add = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let outcome = use_bounded_listen({
        let backend = backend.clone();
        move || {
            bounded_listen(
                backend
                    .store
                    .listen::<Member>(Query::collection(collections::MEMBERS)),
                fallback_members(),
                FETCH_BOUND,
            )
        }
    });

    let (members, loading) = match &*outcome.read() {
        Some(outcome) => (outcome.clone().resolve_or(fallback_members), false),
        None => (Vec::new(), true),
    };

    let handle_add = {
        let backend = backend.clone();
        move |new_member: NewMember| {
            let backend = backend.clone();
            let mut toast = toast;
            spawn(async move {
                match backend.store.add_doc(collections::MEMBERS, &new_member).await {
                    Ok(created) => {
                        backend
                            .audit
                            .info("member_added", serde_json::json!({ "member": created.id }));
                        toast.success(format!("Member \"{}\" added successfully!", new_member.name));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to add member");
                        toast.error("Failed to add member");
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let backend = backend.clone();
        move |_| {
            let Some(id) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let backend = backend.clone();
            let mut toast = toast;
            spawn(async move {
                match backend.store.delete_doc(collections::MEMBERS, &id).await {
                    Ok(()) => {
                        backend
                            .audit
                            .info("member_deleted", serde_json::json!({ "member": id }));
                        toast.success("Member deleted successfully");
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to delete member");
                        toast.error("Failed to delete member");
                    }
                }
            });
        }
    };

    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Members" }
                    p { "Manage your gym members" }
                }

                MemberTable {
                    members: members,
                    loading: loading,
                    on_add: move |_| show_add.set(true),
                    on_delete: move |id: String| pending_delete.set(Some(id)),
                }

                AddMemberDialog { open: show_add, on_submit: handle_add }

                if pending_delete().is_some() {
                    div { class: "dialog-overlay", onclick: move |_| pending_delete.set(None),
                        div { class: "dialog", onclick: move |evt| evt.stop_propagation(),
                            h3 { class: "dialog-title", "Delete member?" }
                            p { "This removes the member record permanently." }
                            div { class: "dialog-actions",
                                button {
                                    class: "button",
                                    onclick: move |_| pending_delete.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "button button-destructive",
                                    onclick: confirm_delete,
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

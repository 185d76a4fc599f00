use std::time::Duration;

use backend::store::collections;
use backend::{bounded_listen, Backend, Query};
use dioxus::prelude::*;
use shared_types::{Bill, NewBill};

use crate::components::bills_table::BillsTable;
use crate::components::dialogs::CreateBillDialog;
use crate::components::{use_toast, DashboardShell, Portal};
use crate::fallback_data::fallback_bills;
use crate::fetch::use_bounded_listen;

const FETCH_BOUND: Duration = Duration::from_millis(1500);

/// Bill receipts backed by a live subscription, newest due date first.
#[component]
pub fn BillsPage() -> Element {
    let backend = use_context::<Backend>();
    let toast = use_toast();
    let mut show_create = use_signal(|| false);

    let outcome = use_bounded_listen({
        let backend = backend.clone();
        move || {
            bounded_listen(
                backend.store.listen::<Bill>(
                    Query::collection(collections::BILLS)
                        .order_by_desc("due_date")
                        .limit(50),
                ),
                fallback_bills(),
                FETCH_BOUND,
            )
        }
    });

    let (bills, loading) = match &*outcome.read() {
        Some(outcome) => (outcome.clone().resolve_or(fallback_bills), false),
        None => (Vec::new(), true),
    };

    let handle_create = {
        let backend = backend.clone();
        move |new_bill: NewBill| {
            let backend = backend.clone();
            let mut toast = toast;
            spawn(async move {
                match backend.store.add_doc(collections::BILLS, &new_bill).await {
                    Ok(created) => {
                        backend
                            .audit
                            .info("bill_created", serde_json::json!({ "bill": created.id }));
                        toast.success("Bill created successfully");
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to create bill");
                        toast.error("Failed to create bill");
                    }
                }
            });
        }
    };

    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Bill Receipts" }
                    p { "Manage and track all payment receipts" }
                }

                BillsTable {
                    bills: bills,
                    loading: loading,
                    on_create: move |_| show_create.set(true),
                }

                CreateBillDialog { open: show_create, on_submit: handle_create }
            }
        }
    }
}

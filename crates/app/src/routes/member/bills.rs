use std::time::Duration;

use backend::store::collections;
use backend::{bounded_get, Backend, FetchOutcome, Query};
use dioxus::prelude::*;
use shared_types::{AppError, Bill, Member};

use crate::auth::use_auth;
use crate::components::bills_table::BillsTable;
use crate::components::{DashboardShell, Portal};
use crate::fallback_data::fallback_bills;
use crate::fetch::use_bounded_get;

const FETCH_BOUND: Duration = Duration::from_millis(1500);

/// Read-only receipts for the signed-in member. One-shot fetch raced against
/// the bound. No updates afterward; revisiting the page retries.
#[component]
pub fn MemberBillsPage() -> Element {
    let auth = use_auth();
    let backend = use_context::<Backend>();

    let outcome = use_bounded_get({
        let backend = backend.clone();
        let user = auth.current_user.read().clone();
        move || async move {
            let Some(user) = user else {
                // No principal to scope the query to; straight to static data.
                return FetchOutcome::Fallback(fallback_bills());
            };
            bounded_get(
                fetch_member_bills(backend, user.email),
                fallback_bills(),
                FETCH_BOUND,
            )
            .await
        }
    });

    let (bills, loading) = match &*outcome.read() {
        Some(outcome) => (outcome.clone().resolve_or(fallback_bills), false),
        None => (Vec::new(), true),
    };

    rsx! {
        DashboardShell { portal: Portal::Member,
            div { class: "page",
                div { class: "page-header",
                    h1 { "My Bill Receipts" }
                    p { "View your payment receipts" }
                }

                BillsTable { bills: bills, loading: loading, show_actions: false }
            }
        }
    }
}

/// Keyed fetch: resolve the member document by email, then that member's
/// bills. A principal without a member document resolves to an empty set,
/// which the fallback policy treats as substitute-worthy.
async fn fetch_member_bills(backend: Backend, email: String) -> Result<Vec<Bill>, AppError> {
    let members = backend
        .store
        .get_docs::<Member>(&Query::collection(collections::MEMBERS).where_eq("email", email))
        .await?;
    let Some(member) = members.first() else {
        return Ok(Vec::new());
    };
    backend
        .store
        .get_docs::<Bill>(
            &Query::collection(collections::BILLS)
                .where_eq("member_id", member.id.clone())
                .order_by_desc("due_date")
                .limit(50),
        )
        .await
}

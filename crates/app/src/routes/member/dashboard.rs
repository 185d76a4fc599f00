use std::time::Duration;

use backend::store::collections;
use backend::{bounded_listen, Backend, FetchOutcome, Query};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCalendar, LdCreditCard, LdReceipt};
use dioxus_free_icons::Icon;
use shared_types::{Bill, BillStatus, Member, MemberStatus, NewMember};

use crate::auth::use_auth;
use crate::components::{Badge, Card, CardContent, CardHeader, CardTitle, DashboardShell, Portal, Skeleton, StatsCard, Tone};
use crate::fallback_data::{fallback_bills, fallback_notifications, fallback_packages};

/// The member dashboard tolerates less stall than the admin tables.
const FETCH_BOUND: Duration = Duration::from_millis(1000);

/// Member home: profile resolved by the principal's email (created with
/// defaults when missing), recent bills via a bounded subscription, and the
/// notification feed.
#[component]
pub fn MemberDashboardPage() -> Element {
    let auth = use_auth();
    let backend = use_context::<Backend>();

    let mut member = use_signal(|| Option::<Member>::None);
    let mut bills_outcome = use_signal(|| Option::<FetchOutcome<Vec<Bill>>>::None);
    let mut resolving = use_signal(|| true);

    use_hook(move || {
        let backend = backend.clone();
        let user = auth.current_user.read().clone();
        spawn(async move {
            let Some(user) = user else {
                resolving.set(false);
                return;
            };

            let member_query =
                Query::collection(collections::MEMBERS).where_eq("email", user.email.clone());
            let resolved = match backend.store.get_docs::<Member>(&member_query).await {
                Ok(mut found) if !found.is_empty() => Some(found.remove(0)),
                Ok(_) => {
                    // Self-healing: a signed-in principal without a member
                    // document gets one created with defaults.
                    backend.audit.info(
                        "member_profile_created",
                        serde_json::json!({ "email": user.email }),
                    );
                    let display_name = if user.display_name.is_empty() {
                        user.short_name().to_string()
                    } else {
                        user.display_name.clone()
                    };
                    let profile = NewMember::default_profile(display_name, user.email.clone());
                    match backend.store.add_doc(collections::MEMBERS, &profile).await {
                        Ok(created) => Some(Member {
                            id: created.id,
                            name: profile.name,
                            email: profile.email,
                            phone: profile.phone,
                            address: profile.address,
                            join_date: created.create_time,
                            package_id: profile.package_id,
                            status: profile.status,
                            avatar: None,
                        }),
                        Err(err) => {
                            tracing::error!(error = %err, "failed to create member profile");
                            None
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to resolve member profile");
                    None
                }
            };
            resolving.set(false);

            let Some(resolved) = resolved else {
                bills_outcome.set(Some(FetchOutcome::Fallback(fallback_bills())));
                return;
            };
            let bills_query = Query::collection(collections::BILLS)
                .where_eq("member_id", resolved.id.clone())
                .order_by_desc("due_date")
                .limit(10);
            member.set(Some(resolved));

            let mut stream = bounded_listen(
                backend.store.listen::<Bill>(bills_query),
                fallback_bills(),
                FETCH_BOUND,
            );
            while let Some(outcome) = stream.next().await {
                bills_outcome.set(Some(outcome));
            }
        });
    });

    if resolving() {
        return rsx! {
            DashboardShell { portal: Portal::Member,
                div { class: "page",
                    p { class: "guard-loading", "Loading dashboard..." }
                }
            }
        };
    }

    let bills = match &*bills_outcome.read() {
        Some(outcome) => outcome.clone().resolve_or(fallback_bills),
        None => Vec::new(),
    };
    let bills_ready = bills_outcome.read().is_some();

    let member_snapshot = member.read().clone();
    let greeting = member_snapshot
        .as_ref()
        .map(|m| m.name.split_whitespace().next().unwrap_or(&m.name).to_string())
        .or_else(|| {
            auth.current_user
                .read()
                .as_ref()
                .map(|u| u.short_name().to_string())
        })
        .unwrap_or_else(|| "Member".to_string());

    let package_name = member_snapshot
        .as_ref()
        .and_then(|m| {
            fallback_packages()
                .into_iter()
                .find(|p| p.id == m.package_id)
                .map(|p| p.name)
        })
        .unwrap_or_else(|| "None".to_string());

    let status = member_snapshot
        .as_ref()
        .map(|m| m.status)
        .unwrap_or(MemberStatus::Active);

    let notifications = fallback_notifications();
    let unread = notifications.iter().filter(|n| !n.read).count();
    let recent_bills: Vec<Bill> = bills.iter().take(3).cloned().collect();
    let bill_count = bills.len();

    rsx! {
        DashboardShell { portal: Portal::Member,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Welcome, {greeting}! 👋" }
                    p { "Here's your membership overview" }
                }

                div { class: "stats-grid",
                    StatsCard { title: "Current Package", value: package_name, tone: Tone::Primary,
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 22, height: 22 }
                    }
                    StatsCard {
                        title: "Status",
                        value: status.as_str().to_string(),
                        tone: if status == MemberStatus::Active { Tone::Success } else { Tone::Destructive },
                        Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                    }
                    StatsCard { title: "Total Bills", value: "{bill_count}",
                        Icon::<LdReceipt> { icon: LdReceipt, width: 22, height: 22 }
                    }
                    StatsCard { title: "Notifications", value: "{unread}", tone: Tone::Warning,
                        Icon::<LdBell> { icon: LdBell, width: 22, height: 22 }
                    }
                }

                div { class: "two-col",
                    Card {
                        CardHeader {
                            CardTitle { "Recent Bills" }
                        }
                        CardContent {
                            if !bills_ready {
                                Skeleton {}
                                Skeleton {}
                            } else {
                                for bill in recent_bills {
                                    div { key: "{bill.id}", class: "tx-row",
                                        div {
                                            p { class: "cell-strong", "{bill.package_name}" }
                                            p { class: "muted", {bill.due_date.format("Due %b %d, %Y").to_string()} }
                                        }
                                        div { class: "tx-row-amount",
                                            p { class: "cell-strong", "₹{bill.amount}" }
                                            Badge {
                                                tone: match bill.status {
                                                    BillStatus::Paid => Tone::Success,
                                                    BillStatus::Pending => Tone::Warning,
                                                    BillStatus::Overdue => Tone::Destructive,
                                                },
                                                "{bill.status.as_str()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Notifications" }
                        }
                        CardContent {
                            for notification in notifications {
                                div { key: "{notification.id}", class: "notification-row",
                                    div {
                                        p { class: "cell-strong", "{notification.title}" }
                                        p { class: "muted", "{notification.message}" }
                                    }
                                    Badge {
                                        tone: match notification.kind {
                                            shared_types::NotificationKind::Info => Tone::Default,
                                            shared_types::NotificationKind::Warning => Tone::Warning,
                                            shared_types::NotificationKind::Success => Tone::Success,
                                            shared_types::NotificationKind::FeeReminder => Tone::Primary,
                                        },
                                        "{notification.kind.label()}"
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

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAlarmClock, LdBell, LdClock, LdIndianRupee, LdReceipt, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{BillStatus, MemberStatus};

use crate::components::{Badge, Card, CardContent, CardHeader, CardTitle, StatsCard, Tone};
use crate::components::{DashboardShell, Portal};
use crate::fallback_data::{fallback_bills, fallback_members};
use crate::routes::Route;

/// Admin overview: stat tiles, quick actions, recent transactions and
/// alerts, all computed from the static dataset.
#[component]
pub fn AdminDashboardPage() -> Element {
    let members = fallback_members();
    let bills = fallback_bills();

    let active_members = members
        .iter()
        .filter(|m| m.status == MemberStatus::Active)
        .count();
    let total_revenue: i64 = bills.iter().map(|b| b.amount).sum();
    let pending = bills
        .iter()
        .filter(|b| b.status == BillStatus::Pending)
        .count();
    let overdue = bills
        .iter()
        .filter(|b| b.status == BillStatus::Overdue)
        .count();
    let recent_bills: Vec<_> = bills.iter().take(5).cloned().collect();
    let revenue_display = format!("₹{:.1}k", total_revenue as f64 / 1000.0);

    rsx! {
        DashboardShell { portal: Portal::Admin,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Dashboard" }
                    p { "Welcome back! Here's your gym overview." }
                }

                div { class: "stats-grid",
                    StatsCard { title: "Total Members", value: "{members.len()}", tone: Tone::Primary,
                        Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 }
                    }
                    StatsCard { title: "Active Members", value: "{active_members}", tone: Tone::Success,
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 }
                    }
                    StatsCard { title: "Total Revenue", value: revenue_display,
                        Icon::<LdIndianRupee> { icon: LdIndianRupee, width: 22, height: 22 }
                    }
                    StatsCard { title: "Pending Bills", value: "{pending + overdue}", tone: Tone::Warning,
                        Icon::<LdClock> { icon: LdClock, width: 22, height: 22 }
                    }
                }

                div { class: "quick-actions",
                    Link { to: Route::AdminMembers {}, class: "quick-action",
                        Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                        span { "Add Member" }
                    }
                    Link { to: Route::AdminBills {}, class: "quick-action",
                        Icon::<LdReceipt> { icon: LdReceipt, width: 20, height: 20 }
                        span { "Create Bill" }
                    }
                    Link { to: Route::AdminPackages {}, class: "quick-action",
                        Icon::<LdIndianRupee> { icon: LdIndianRupee, width: 20, height: 20 }
                        span { "Packages" }
                    }
                    Link { to: Route::AdminNotifications {}, class: "quick-action",
                        Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                        span { "Notify" }
                    }
                    Link { to: Route::AdminReports {}, class: "quick-action",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                        span { "Reports" }
                    }
                }

                div { class: "two-col",
                    Card {
                        CardHeader {
                            CardTitle { "Recent Transactions" }
                        }
                        CardContent {
                            for bill in recent_bills {
                                div { key: "{bill.id}", class: "tx-row",
                                    div { class: "tx-row-main",
                                        span { class: "tx-avatar",
                                            {bill.member_name.chars().next().unwrap_or('?').to_string()}
                                        }
                                        div {
                                            p { class: "cell-strong", "{bill.member_name}" }
                                            p { class: "muted", "{bill.package_name}" }
                                        }
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

                    Card {
                        CardHeader {
                            CardTitle { "Alerts & Reminders" }
                        }
                        CardContent {
                            if overdue > 0 {
                                div { class: "alert alert-destructive",
                                    Icon::<LdAlarmClock> { icon: LdAlarmClock, width: 20, height: 20 }
                                    div {
                                        p { class: "cell-strong", "Overdue Payments" }
                                        p { class: "muted",
                                            if overdue == 1 { "1 member has overdue fees" } else { "{overdue} members have overdue fees" }
                                        }
                                    }
                                }
                            }
                            div { class: "alert alert-warning",
                                Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                                div {
                                    p { class: "cell-strong", "Pending Renewals" }
                                    p { class: "muted",
                                        if pending == 1 { "1 membership is pending renewal" } else { "{pending} memberships are pending renewal" }
                                    }
                                }
                            }
                            div { class: "alert alert-success",
                                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                                div {
                                    p { class: "cell-strong", "Growth on Track" }
                                    p { class: "muted", "Member growth is up 12% this month" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::NotificationKind;

use crate::components::{Badge, Card, CardContent, CardHeader, CardTitle, DashboardShell, Portal, Tone};
use crate::fallback_data::fallback_notifications;

fn kind_tone(kind: NotificationKind) -> Tone {
    match kind {
        NotificationKind::Info => Tone::Default,
        NotificationKind::Warning => Tone::Warning,
        NotificationKind::Success => Tone::Success,
        NotificationKind::FeeReminder => Tone::Primary,
    }
}

/// Notification feed, shared between the admin and member portals.
#[component]
pub fn NotificationsPage(portal: Portal) -> Element {
    rsx! {
        DashboardShell { portal: portal,
            div { class: "page",
                div { class: "page-header",
                    h1 { "Notifications" }
                    p { "View system updates and alerts" }
                }

                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            "All Notifications"
                        }
                    }
                    CardContent {
                        for notification in fallback_notifications() {
                            div {
                                key: "{notification.id}",
                                class: if notification.read { "notification-row" } else { "notification-row notification-unread" },
                                div {
                                    p { class: "cell-strong", "{notification.title}" }
                                    p { class: "muted", "{notification.message}" }
                                    p { class: "muted", {notification.created_at.format("%b %d, %Y").to_string()} }
                                }
                                Badge { tone: kind_tone(notification.kind), "{notification.kind.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use backend::Backend;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdDumbbell, LdFileText, LdLayoutDashboard, LdLogOut, LdPackage, LdReceipt,
    LdShoppingBag, LdUsers, LdUtensils,
};
use dioxus_free_icons::Icon;

use crate::auth::{use_auth, use_is_admin};
use crate::routes::Route;

/// Which portal's navigation the shell shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portal {
    Admin,
    Member,
    Visitor,
}

impl Portal {
    fn label(&self) -> &'static str {
        match self {
            Portal::Admin => "admin",
            Portal::Member => "member",
            Portal::Visitor => "guest",
        }
    }
}

/// Dashboard chrome: brand header, portal-scoped sidebar navigation, sign-out
/// action, page content. Every dashboard page wraps itself in this shell.
#[component]
pub fn DashboardShell(portal: Portal, children: Element) -> Element {
    let auth = use_auth();
    let backend = use_context::<Backend>();
    let route = use_route::<Route>();

    let signed_in = auth.is_authenticated();
    let is_admin = use_is_admin();

    let handle_logout = move |_| {
        let user_id = auth
            .current_user
            .read()
            .as_ref()
            .map(|u| u.id.clone());
        backend
            .audit
            .info("logout", serde_json::json!({ "user": user_id }));
        backend.auth.sign_out();
        navigator().push(Route::Index {});
    };

    rsx! {
        div { class: "shell",
            aside { class: "sidebar",
                Link { to: Route::Index {}, class: "sidebar-brand",
                    span { class: "sidebar-brand-icon",
                        Icon::<LdDumbbell> { icon: LdDumbbell, width: 20, height: 20 }
                    }
                    div {
                        h1 { class: "sidebar-brand-name", "Power" span { class: "accent", "GYM" } }
                        p { class: "sidebar-brand-sub", "{portal.label()} panel" }
                    }
                }

                nav { class: "sidebar-nav",
                    match portal {
                        Portal::Admin => rsx! {
                            NavLink { to: Route::AdminDashboard {}, active: matches!(route, Route::AdminDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                            NavLink { to: Route::AdminMembers {}, active: matches!(route, Route::AdminMembers {}),
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Members"
                            }
                            NavLink { to: Route::AdminBills {}, active: matches!(route, Route::AdminBills {}),
                                Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 }
                                "Bills"
                            }
                            NavLink { to: Route::AdminPackages {}, active: matches!(route, Route::AdminPackages {}),
                                Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                                "Packages"
                            }
                            NavLink { to: Route::AdminNotifications {}, active: matches!(route, Route::AdminNotifications {}),
                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                "Notifications"
                            }
                            NavLink { to: Route::AdminReports {}, active: matches!(route, Route::AdminReports {}),
                                Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                "Reports"
                            }
                            NavLink { to: Route::AdminSupplements {}, active: matches!(route, Route::AdminSupplements {}),
                                Icon::<LdShoppingBag> { icon: LdShoppingBag, width: 18, height: 18 }
                                "Supplements"
                            }
                            NavLink { to: Route::AdminDiet {}, active: matches!(route, Route::AdminDiet {}),
                                Icon::<LdUtensils> { icon: LdUtensils, width: 18, height: 18 }
                                "Diet Plans"
                            }
                        },
                        Portal::Member => rsx! {
                            // Admins are admitted here too; give them a way back.
                            if is_admin {
                                NavLink { to: Route::AdminDashboard {}, active: false,
                                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                    "Admin Panel"
                                }
                            }
                            NavLink { to: Route::MemberDashboard {}, active: matches!(route, Route::MemberDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Dashboard"
                            }
                            NavLink { to: Route::MemberBills {}, active: matches!(route, Route::MemberBills {}),
                                Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 }
                                "My Bills"
                            }
                            NavLink { to: Route::MemberNotifications {}, active: matches!(route, Route::MemberNotifications {}),
                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                "Notifications"
                            }
                        },
                        Portal::Visitor => rsx! {
                            NavLink { to: Route::UserDashboard {}, active: matches!(route, Route::UserDashboard {}),
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                "Browse"
                            }
                            NavLink { to: Route::MemberSignup {}, active: false,
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Join Now"
                            }
                        },
                    }
                }

                div { class: "sidebar-footer",
                    if signed_in {
                        button { class: "sidebar-logout", onclick: handle_logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            "Sign Out"
                        }
                    } else {
                        Link { to: Route::MemberLogin {}, class: "sidebar-logout", "Sign In" }
                    }
                }
            }

            main { class: "page-content", {children} }
        }
    }
}

#[component]
fn NavLink(to: Route, active: bool, children: Element) -> Element {
    rsx! {
        Link {
            to: to,
            class: if active { "nav-link nav-link-active" } else { "nav-link" },
            {children}
        }
    }
}

pub mod admin;
pub mod index;
pub mod member;
pub mod not_found;
pub mod notifications;
pub mod user;

use dioxus::prelude::*;

use crate::components::Portal;
use crate::guard::{AdminGuard, MemberGuard};

use index::Index;
use not_found::NotFound;

/// Application routes. The admin and member subtrees sit behind their guard
/// layouts; visitor pages are unauthenticated by design.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/member/login")]
    MemberLogin {},
    #[route("/member/signup")]
    MemberSignup {},
    // ── Admin subtree ──
    #[layout(AdminGuard)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/members")]
    AdminMembers {},
    #[route("/admin/bills")]
    AdminBills {},
    #[route("/admin/packages")]
    AdminPackages {},
    #[route("/admin/supplements")]
    AdminSupplements {},
    #[route("/admin/diet")]
    AdminDiet {},
    #[route("/admin/notifications")]
    AdminNotifications {},
    #[route("/admin/reports")]
    AdminReports {},
    #[end_layout]
    // ── Member subtree (admins admitted) ──
    #[layout(MemberGuard)]
    #[route("/member")]
    MemberDashboard {},
    #[route("/member/bills")]
    MemberBills {},
    #[route("/member/notifications")]
    MemberNotifications {},
    #[end_layout]
    // ── Visitor pages ──
    #[route("/user")]
    UserDashboard {},
    #[route("/user/signup")]
    UserSignup {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn AdminLogin() -> Element {
    admin::login::AdminLoginPage()
}

#[component]
fn MemberLogin() -> Element {
    member::login::MemberLoginPage()
}

#[component]
fn MemberSignup() -> Element {
    member::signup::MemberSignupPage()
}

#[component]
fn AdminDashboard() -> Element {
    admin::dashboard::AdminDashboardPage()
}

#[component]
fn AdminMembers() -> Element {
    admin::members::MembersPage()
}

#[component]
fn AdminBills() -> Element {
    admin::bills::BillsPage()
}

#[component]
fn AdminPackages() -> Element {
    admin::packages::PackagesPage()
}

#[component]
fn AdminSupplements() -> Element {
    admin::supplements::SupplementsPage()
}

#[component]
fn AdminDiet() -> Element {
    admin::diet::DietPage()
}

#[component]
fn AdminNotifications() -> Element {
    rsx! { notifications::NotificationsPage { portal: Portal::Admin } }
}

#[component]
fn AdminReports() -> Element {
    admin::reports::ReportsPage()
}

#[component]
fn MemberDashboard() -> Element {
    member::dashboard::MemberDashboardPage()
}

#[component]
fn MemberBills() -> Element {
    member::bills::MemberBillsPage()
}

#[component]
fn MemberNotifications() -> Element {
    rsx! { notifications::NotificationsPage { portal: Portal::Member } }
}

#[component]
fn UserDashboard() -> Element {
    user::dashboard::UserDashboardPage()
}

#[component]
fn UserSignup() -> Element {
    user::signup::UserSignupPage()
}

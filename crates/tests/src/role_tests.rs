use pretty_assertions::assert_eq;
use shared_types::{derive_role, Role, ADMIN_EMAILS};

#[test]
fn derivation_is_pure_and_deterministic() {
    for email in [
        "admin@gym.com",
        "admin@gmail.com",
        "admin@powergym.com",
        "sarah@example.com",
        "",
    ] {
        assert_eq!(derive_role(email), derive_role(email));
    }
}

#[test]
fn every_allow_listed_email_is_admin() {
    for email in ADMIN_EMAILS {
        assert_eq!(derive_role(email), Role::Admin);
    }
}

#[test]
fn near_misses_stay_member() {
    assert_eq!(derive_role("Admin@gym.com"), Role::Member);
    assert_eq!(derive_role("admin@gym.com "), Role::Member);
    assert_eq!(derive_role("admin@gym.co"), Role::Member);
    assert_eq!(derive_role("admin+test@gym.com"), Role::Member);
}

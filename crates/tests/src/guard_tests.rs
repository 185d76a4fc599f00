use pretty_assertions::assert_eq;
use shared_types::{decide, GuardDecision, Principal, RequiredRole};

fn admin() -> Principal {
    Principal {
        id: "uid-admin".into(),
        email: "admin@powergym.com".into(),
        display_name: "Admin".into(),
    }
}

fn member() -> Principal {
    Principal {
        id: "uid-member".into(),
        email: "sarah@example.com".into(),
        display_name: "Sarah Johnson".into(),
    }
}

const ALL_REQUIRED: [RequiredRole; 3] = [RequiredRole::Admin, RequiredRole::Member, RequiredRole::None];

/// Every (loading, principal, required) combination maps to exactly one
/// decision; the function is total and never panics.
#[test]
fn decision_table_is_total() {
    let principals = [None, Some(admin()), Some(member())];
    for loading in [true, false] {
        for principal in &principals {
            for required in ALL_REQUIRED {
                let decision = decide(loading, principal.as_ref(), required);
                if loading {
                    assert_eq!(decision, GuardDecision::Placeholder);
                } else if principal.is_none() {
                    assert_eq!(decision, GuardDecision::RedirectToLanding);
                } else {
                    assert_ne!(decision, GuardDecision::Placeholder);
                    assert_ne!(decision, GuardDecision::RedirectToLanding);
                }
            }
        }
    }
}

#[test]
fn resolved_null_principal_redirects_to_landing() {
    assert_eq!(
        decide(false, None, RequiredRole::Admin),
        GuardDecision::RedirectToLanding
    );
    assert_eq!(
        decide(false, None, RequiredRole::Member),
        GuardDecision::RedirectToLanding
    );
}

#[test]
fn member_hitting_admin_subtree_is_sent_to_member_home() {
    assert_eq!(
        decide(false, Some(&member()), RequiredRole::Admin),
        GuardDecision::RedirectToMemberHome
    );
}

#[test]
fn admin_is_admitted_everywhere() {
    for required in ALL_REQUIRED {
        assert_eq!(decide(false, Some(&admin()), required), GuardDecision::Admit);
    }
}

#[test]
fn member_is_admitted_to_member_subtree() {
    assert_eq!(
        decide(false, Some(&member()), RequiredRole::Member),
        GuardDecision::Admit
    );
}

#[test]
fn loading_never_redirects() {
    // Placeholder while the session resolves, even for an admin-only subtree
    // with no principal yet. Avoids the redirect flash.
    assert_eq!(
        decide(true, None, RequiredRole::Admin),
        GuardDecision::Placeholder
    );
}

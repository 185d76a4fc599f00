use crate::principal::{Principal, Role};

/// Role a route subtree declares for admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    Admin,
    Member,
    /// Protected but role-agnostic: any signed-in principal is admitted.
    None,
}

/// Outcome of evaluating a navigation against the session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial session resolution still pending: render a neutral
    /// placeholder, never redirect (avoids a redirect flash before the
    /// auth stream's first emission).
    Placeholder,
    /// Not signed in; back to the public landing page.
    RedirectToLanding,
    /// Signed in but not an admin on an admin subtree.
    RedirectToMemberHome,
    Admit,
}

/// Route-guard decision table.
///
/// Total over every `(loading, principal, required)` combination. Admins are
/// deliberately admitted into member subtrees; the asymmetry is intentional,
/// not an oversight.
pub fn decide(
    loading: bool,
    principal: Option<&Principal>,
    required: RequiredRole,
) -> GuardDecision {
    if loading {
        return GuardDecision::Placeholder;
    }
    let Some(principal) = principal else {
        return GuardDecision::RedirectToLanding;
    };
    match (required, principal.role()) {
        (RequiredRole::Admin, Role::Member) => GuardDecision::RedirectToMemberHome,
        (RequiredRole::Admin, Role::Admin) => GuardDecision::Admit,
        (RequiredRole::Member, Role::Admin) => GuardDecision::Admit,
        (RequiredRole::Member, Role::Member) => GuardDecision::Admit,
        (RequiredRole::None, _) => GuardDecision::Admit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Principal {
        Principal {
            id: "uid-a".into(),
            email: "admin@gym.com".into(),
            display_name: "Admin".into(),
        }
    }

    fn member() -> Principal {
        Principal {
            id: "uid-m".into(),
            email: "john@example.com".into(),
            display_name: "John Smith".into(),
        }
    }

    #[test]
    fn loading_always_renders_placeholder() {
        for required in [RequiredRole::Admin, RequiredRole::Member, RequiredRole::None] {
            assert_eq!(decide(true, None, required), GuardDecision::Placeholder);
            assert_eq!(
                decide(true, Some(&admin()), required),
                GuardDecision::Placeholder
            );
            assert_eq!(
                decide(true, Some(&member()), required),
                GuardDecision::Placeholder
            );
        }
    }

    #[test]
    fn unauthenticated_redirects_to_landing() {
        for required in [RequiredRole::Admin, RequiredRole::Member, RequiredRole::None] {
            assert_eq!(decide(false, None, required), GuardDecision::RedirectToLanding);
        }
    }

    #[test]
    fn member_on_admin_subtree_redirects_to_member_home() {
        assert_eq!(
            decide(false, Some(&member()), RequiredRole::Admin),
            GuardDecision::RedirectToMemberHome
        );
    }

    #[test]
    fn admin_on_admin_subtree_is_admitted() {
        assert_eq!(
            decide(false, Some(&admin()), RequiredRole::Admin),
            GuardDecision::Admit
        );
    }

    #[test]
    fn admin_on_member_subtree_is_admitted() {
        // Intentional asymmetry: admins may browse member pages.
        assert_eq!(
            decide(false, Some(&admin()), RequiredRole::Member),
            GuardDecision::Admit
        );
    }

    #[test]
    fn member_on_member_subtree_is_admitted() {
        assert_eq!(
            decide(false, Some(&member()), RequiredRole::Member),
            GuardDecision::Admit
        );
    }

    #[test]
    fn role_agnostic_subtree_admits_any_principal() {
        assert_eq!(
            decide(false, Some(&admin()), RequiredRole::None),
            GuardDecision::Admit
        );
        assert_eq!(
            decide(false, Some(&member()), RequiredRole::None),
            GuardDecision::Admit
        );
    }
}

use serde::{Deserialize, Serialize};

/// Administrator allow-list. The role of a signed-in principal is derived
/// purely from its email; nothing role-shaped is stored on the backend.
pub const ADMIN_EMAILS: &[&str] = &["admin@gym.com", "admin@gmail.com", "admin@powergym.com"];

/// Role of an authenticated principal.
///
/// An unauthenticated visitor has no principal at all, so there is no
/// `Anonymous` variant here; absence of a `Principal` is that state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

/// Derive the role for an email address.
///
/// Case-sensitive exact match against [`ADMIN_EMAILS`]; everything else is a
/// member. Pure: two sessions with the same email always derive the same
/// role.
pub fn derive_role(email: &str) -> Role {
    if ADMIN_EMAILS.contains(&email) {
        Role::Admin
    } else {
        Role::Member
    }
}

/// The resolved identity of the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

impl Principal {
    pub fn role(&self) -> Role {
        derive_role(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Short name for greeting headers: the display name's first word, or the
    /// local part of the email when no display name was set.
    pub fn short_name(&self) -> &str {
        let first = self.display_name.split_whitespace().next();
        match first {
            Some(word) => word,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(email: &str) -> Principal {
        Principal {
            id: "uid-1".into(),
            email: email.into(),
            display_name: "Test User".into(),
        }
    }

    #[test]
    fn derive_role_is_deterministic() {
        for email in ["admin@gym.com", "john@example.com", ""] {
            assert_eq!(derive_role(email), derive_role(email));
        }
    }

    #[test]
    fn allow_listed_emails_are_admin() {
        assert_eq!(derive_role("admin@gym.com"), Role::Admin);
        assert_eq!(derive_role("admin@gmail.com"), Role::Admin);
        assert_eq!(derive_role("admin@powergym.com"), Role::Admin);
    }

    #[test]
    fn other_emails_are_member() {
        assert_eq!(derive_role("john@example.com"), Role::Member);
        assert_eq!(derive_role("admin@other.com"), Role::Member);
        assert_eq!(derive_role(""), Role::Member);
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(derive_role("Admin@gym.com"), Role::Member);
        assert_eq!(derive_role("ADMIN@GYM.COM"), Role::Member);
    }

    #[test]
    fn principal_role_follows_email() {
        assert!(principal("admin@powergym.com").is_admin());
        assert!(!principal("sarah@example.com").is_admin());
    }

    #[test]
    fn short_name_prefers_display_name() {
        let p = principal("john@example.com");
        assert_eq!(p.short_name(), "Test");
    }

    #[test]
    fn short_name_falls_back_to_email_local_part() {
        let mut p = principal("john@example.com");
        p.display_name = String::new();
        assert_eq!(p.short_name(), "john");
    }
}

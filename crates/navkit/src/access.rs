//! Role-based access checks for route leaves.
//!
//! The compiler only asks one question: may a user holding `user_roles`
//! see a leaf that requires `required`? Policies answer it through the
//! [`AccessPolicy`] trait; closures with the same shape work too.

use std::collections::HashSet;

/// Capability predicate consulted for every leaf that declares `access`.
pub trait AccessPolicy {
    fn allowed(&self, required: &[String], user_roles: &[String]) -> bool;
}

impl<F> AccessPolicy for F
where
    F: Fn(&[String], &[String]) -> bool,
{
    fn allowed(&self, required: &[String], user_roles: &[String]) -> bool {
        self(required, user_roles)
    }
}

/// Grants access when the user holds at least one required role.
///
/// - An empty requirement list is public.
/// - A configured superuser role passes every check.
#[derive(Debug, Clone, Default)]
pub struct AnyRole {
    superuser: Option<String>,
}

impl AnyRole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `role` as holding every permission.
    pub fn with_superuser(role: impl Into<String>) -> Self {
        Self {
            superuser: Some(role.into()),
        }
    }
}

impl AccessPolicy for AnyRole {
    fn allowed(&self, required: &[String], user_roles: &[String]) -> bool {
        if required.is_empty() {
            return true;
        }

        if let Some(ref superuser) = self.superuser
            && user_roles.iter().any(|r| r == superuser)
        {
            return true;
        }

        let held: HashSet<&str> = user_roles.iter().map(String::as_str).collect();
        required.iter().any(|r| held.contains(r.as_str()))
    }
}

/// Check an optional requirement; an absent requirement is always allowed.
pub fn is_permitted<P>(policy: &P, required: Option<&[String]>, user_roles: &[String]) -> bool
where
    P: AccessPolicy + ?Sized,
{
    match required {
        None => true,
        Some(required) => policy.allowed(required, user_roles),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn roles(r: &[&str]) -> Vec<String> {
        r.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn any_role_matches_intersection() {
        let policy = AnyRole::new();
        assert!(policy.allowed(&roles(&["admin", "editor"]), &roles(&["editor"])));
        assert!(!policy.allowed(&roles(&["admin"]), &roles(&["guest"])));
        assert!(!policy.allowed(&roles(&["admin"]), &[]));
    }

    #[test]
    fn empty_requirement_is_public() {
        assert!(AnyRole::new().allowed(&[], &[]));
    }

    #[test]
    fn superuser_bypasses() {
        let policy = AnyRole::with_superuser("root");
        assert!(policy.allowed(&roles(&["admin"]), &roles(&["root"])));
        assert!(!policy.allowed(&roles(&["admin"]), &roles(&["guest"])));
    }

    #[test]
    fn absent_requirement_always_permitted() {
        let deny_all = |_: &[String], _: &[String]| false;
        assert!(is_permitted(&deny_all, None, &[]));
        assert!(!is_permitted(&deny_all, Some(&roles(&["x"])), &roles(&["x"])));
    }
}

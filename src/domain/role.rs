// SPDX-License-Identifier: MPL-2.0
//! User roles recognized by the portal.

/// Role selected at sign-in. There is no authorization enforcement behind
/// it; the role only decides which dashboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Default tab on the login screen.
    #[default]
    Student,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_distinct() {
        assert_ne!(Role::Student, Role::Admin);
    }
}

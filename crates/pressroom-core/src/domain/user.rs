use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the calling user. Only the admin/other distinction is consumed:
/// admins see every post, authors see only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Author,
}

impl Role {
    /// Parse a role string; anything other than `admin` is an author.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Author
        }
    }
}

/// The authenticated caller, passed explicitly into each operation.
///
/// Session management lives outside this crate; operations only consume the
/// user id and the role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_admin_role_case_insensitive() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
    }

    #[test]
    fn parse_other_roles_as_author() {
        assert_eq!(Role::parse("editor"), Role::Author);
        assert_eq!(Role::parse(""), Role::Author);
    }
}

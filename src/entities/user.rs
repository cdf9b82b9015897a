//! Dashboard users

use crate::core::entity::CompanyScoped;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role of a user within their company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identity able to sign in to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>, role: Role, company_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: full_name.into(),
            role,
            company_id,
            created_at: Utc::now(),
        }
    }

    /// Name shown in the top bar; falls back to "User" when blank
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() { "User" } else { name }
    }
}

impl CompanyScoped for User {
    fn company_id(&self) -> Uuid {
        self.company_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_user() {
        let mut user = User::new("a@b.co", "Asha Rao", Role::Admin, Uuid::new_v4());
        assert_eq!(user.display_name(), "Asha Rao");

        user.full_name = "   ".to_string();
        assert_eq!(user.display_name(), "User");
    }

    #[test]
    fn test_role_serde_is_snake_case() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}

//! Seed user accounts for the web layer's login.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::table::{FieldValue, TableRow, TableSpec};

/// A generated login account.
///
/// `username` is unique within a generated batch and `email` is always
/// `username + "@example.com"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    /// Plain text as generated; the database sink may replace it with a
    /// bcrypt hash.
    pub password: String,
    pub admin: bool,
}

impl TableRow for SeedUser {
    const TABLE: TableSpec = TableSpec {
        name: "users",
        fields: &["user_id", "username", "email", "password", "admin"],
        primary_key: Some("user_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.user_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.user_id.get().into(),
            self.username.clone().into(),
            self.email.clone().into(),
            self.password.clone().into(),
            self.admin.into(),
        ]
    }
}

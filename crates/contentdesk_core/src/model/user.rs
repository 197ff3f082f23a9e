//! Portal user accounts.

use super::ids::RecordId;
use super::role::Role;
use serde::{Deserialize, Serialize};

/// Stored account. The password is kept in plain text, as the existing
/// store layout does; nothing here hashes or hides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Form payload for creating or replacing an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserDraft {
    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}

//! User Entity
//!
//! An account that can authenticate: an administrator or a user acting on
//! behalf of an employer. Candidates are not users; they exist only as
//! board-side records.

use chrono::{DateTime, Utc};
use kernel::id::{EmployerId, UserId};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity
///
/// Email and role are fixed at registration; there is no update path.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login identifier, lowercase by construction
    pub email: Email,
    /// Argon2id PHC string; the plaintext never reaches storage
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub name: Option<String>,
    /// Owning employer for role=employer; admins have none
    pub employer_id: Option<EmployerId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at registration time
    pub fn new(
        email: Email,
        password_hash: HashedPassword,
        role: UserRole,
        name: Option<String>,
        employer_id: Option<EmployerId>,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            role,
            name,
            employer_id,
            created_at: Utc::now(),
        }
    }
}

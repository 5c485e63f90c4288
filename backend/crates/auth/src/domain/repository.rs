//! Repository Traits
//!
//! Interfaces for identity persistence. Implementation is in the
//! infrastructure layer.

use kernel::id::{EmployerId, UserId};

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (emails are stored lowercase)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// All users affiliated with an employer (notification recipients)
    async fn find_by_employer_id(&self, employer_id: &EmployerId) -> AuthResult<Vec<User>>;
}

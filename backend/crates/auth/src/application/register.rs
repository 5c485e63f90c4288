//! Register Use Case
//!
//! Creates a new user account with a hashed password.

use std::sync::Arc;

use kernel::id::{EmployerId, UserId};
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Role code, defaults to employer when absent
    pub role: Option<String>,
    pub name: Option<String>,
    pub employer_id: Option<EmployerId>,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let role = match input.role.as_deref() {
            None | Some("") => UserRole::default(),
            Some(code) => UserRole::from_code(code)
                .ok_or_else(|| AuthError::Validation(format!("Unknown role: {}", code)))?,
        };

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash(self.config.pepper())?;

        // Case-insensitive duplicate check; a lost race against a concurrent
        // registration still surfaces as 409 via the unique index.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(email, password_hash, role, input.name, input.employer_id);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
            email: user.email.into_db(),
            role: user.role,
        })
    }
}

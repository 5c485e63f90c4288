//! Login Use Case
//!
//! Verifies credentials and issues a signed bearer token.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;
use platform::token::{self, TokenClaims};

use crate::application::config::AuthConfig;
use crate::domain::authorizer::AuthUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token carrying {sub, role, exp}
    pub token: String,
    /// The authenticated subject
    pub user: AuthUser,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email, malformed email, and password mismatch must all
        // produce the identical outcome: no account enumeration signal.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let expires_at_ms = Utc::now().timestamp_millis() + self.config.token_ttl_ms();
        let claims = TokenClaims::new(
            user.user_id.into_uuid(),
            user.role.code(),
            expires_at_ms,
        );
        let token = token::sign(&claims, &self.config.token_secret);

        tracing::info!(
            user_id = %user.user_id,
            role = %user.role,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            user: AuthUser::from(&user),
        })
    }
}

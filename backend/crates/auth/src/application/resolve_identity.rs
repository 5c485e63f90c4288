//! Resolve Identity Use Case
//!
//! Verifies a bearer token and re-resolves its subject from the identity
//! store. Read-only; the resolved identity is attached to the request
//! context by the middleware.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::authorizer::AuthUser;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Resolve identity use case
pub struct ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ResolveIdentityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify the token and load its subject.
    ///
    /// Any defect — bad structure, bad signature, expiry, or a subject that
    /// no longer exists — yields the same Unauthorized outcome.
    pub async fn execute(&self, bearer_token: &str) -> AuthResult<AuthUser> {
        let now_ms = Utc::now().timestamp_millis();
        let claims = token::verify(bearer_token, &self.config.token_secret, now_ms)?;

        let user = self
            .user_repo
            .find_by_id(&UserId::from_uuid(claims.sub))
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(AuthUser::from(&user))
    }
}

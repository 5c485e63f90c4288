//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(users: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(users, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U>(users: U, config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        users: Arc::new(users),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<U>))
        .route("/login", post(handlers::login::<U>))
        .with_state(state)
}

//! Board Routers
//!
//! One router per resource, mounted by the api binary. Public and
//! protected routes for the same resource are built separately and
//! merged; the auth middleware only wraps the protected set.

use axum::routing::{get, patch, post};
use axum::{Router, middleware};
use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_auth};
use auth::{AuthConfig, UserRepository};

use crate::domain::repository::BoardRepository;
use crate::presentation::handlers::{self, BoardAppState};

/// Bundle of the states every board router needs
#[derive(Clone)]
pub struct BoardRouterState<R, U>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub app: BoardAppState<R, U>,
    pub auth: AuthMiddlewareState<U>,
}

impl<R, U> BoardRouterState<R, U>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, users: U, config: AuthConfig) -> Self {
        let users = Arc::new(users);
        let config = Arc::new(config);
        Self {
            app: BoardAppState {
                repo: Arc::new(repo),
                users: users.clone(),
            },
            auth: AuthMiddlewareState { users, config },
        }
    }
}

/// /api/jobs
pub fn jobs_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let public = Router::new()
        .route("/", get(handlers::list_jobs::<R, U>))
        .route("/{id}", get(handlers::get_job::<R, U>))
        .with_state(state.app.clone());

    let protected = Router::new()
        .route("/", post(handlers::create_job::<R, U>))
        .route(
            "/{id}",
            patch(handlers::update_job::<R, U>).delete(handlers::delete_job::<R, U>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app);

    public.merge(protected)
}

/// /api/employers
pub fn employers_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let public = Router::new()
        .route("/", get(handlers::list_employers::<R, U>))
        .route("/{id}", get(handlers::get_employer::<R, U>))
        .with_state(state.app.clone());

    let protected = Router::new()
        .route("/", post(handlers::create_employer::<R, U>))
        .route(
            "/{id}",
            patch(handlers::update_employer::<R, U>)
                .delete(handlers::delete_employer::<R, U>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app);

    public.merge(protected)
}

/// /api/candidates
pub fn candidates_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // The upsert is public; reads require an authenticated employer/admin
    let public = Router::new()
        .route("/", post(handlers::upsert_candidate::<R, U>))
        .with_state(state.app.clone());

    let protected = Router::new()
        .route("/", get(handlers::list_candidates::<R, U>))
        .route("/{id}", get(handlers::get_candidate::<R, U>))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app);

    public.merge(protected)
}

/// /api/applications
pub fn applications_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Candidates hold no accounts, so applying takes no auth; the
    // employer-facing routes are ownership-gated behind it
    let public = Router::new()
        .route("/", post(handlers::apply::<R, U>))
        .with_state(state.app.clone());

    let protected = Router::new()
        .route(
            "/job/{jobId}",
            get(handlers::list_applications_for_job::<R, U>),
        )
        .route(
            "/{id}/status",
            patch(handlers::set_application_status::<R, U>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app);

    public.merge(protected)
}

/// /api/notifications
pub fn notifications_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_notifications::<R, U>)
                .post(handlers::create_notification::<R, U>),
        )
        .route("/{id}/read", patch(handlers::mark_notification_read::<R, U>))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app)
}

/// /api/admin
pub fn admin_router<R, U>(state: BoardRouterState<R, U>) -> Router
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    // Authentication at the router boundary; the admin role check lives in
    // the reporting use cases
    Router::new()
        .route("/counts", get(handlers::admin_counts::<R, U>))
        .route(
            "/applications/status",
            get(handlers::admin_status_breakdown::<R, U>),
        )
        .route(
            "/applications/per-job",
            get(handlers::admin_top_jobs::<R, U>),
        )
        .route(
            "/applications/monthly",
            get(handlers::admin_monthly_volume::<R, U>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth::<U>,
        ))
        .with_state(state.app)
}

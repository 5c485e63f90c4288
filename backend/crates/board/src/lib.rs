//! Board (Job Board Domain) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, read models
//! - `application/` - Use cases (registries, workflow engine, reporting)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Employer / Job / Candidate registries with ownership-scoped mutation
//! - Application lifecycle: public apply, owner-gated listing and status
//!   transitions (flat status set, no transition graph)
//! - Admin reporting: counts, status breakdown, per-job volume, monthly volume
//! - Notification records, emitted fire-and-forget on workflow events

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{BoardError, BoardResult};
pub use infra::postgres::PgBoardRepository;
pub use presentation::router::{
    BoardRouterState, admin_router, applications_router, candidates_router, employers_router,
    jobs_router, notifications_router,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

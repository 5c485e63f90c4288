//! Reporting Use Cases
//!
//! Read-only admin aggregates. Counts are taken independently per
//! collection: a near-simultaneous snapshot, not a transactional one.

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use chrono::Utc;

use crate::domain::report::{
    CollectionCounts, JobApplicationCount, MonthlyCount, StatusCount, monthly_window_start,
};
use crate::domain::repository::{
    ApplicationRepository, CandidateRepository, EmployerRepository, JobRepository,
};
use crate::error::BoardResult;

/// Default ranking size for the per-job volume report
pub const DEFAULT_TOP_JOBS_LIMIT: i64 = 10;

/// Reporting use cases
pub struct ReportingUseCase<E, J, C, A>
where
    E: EmployerRepository,
    J: JobRepository,
    C: CandidateRepository,
    A: ApplicationRepository,
{
    employer_repo: Arc<E>,
    job_repo: Arc<J>,
    candidate_repo: Arc<C>,
    application_repo: Arc<A>,
}

impl<E, J, C, A> ReportingUseCase<E, J, C, A>
where
    E: EmployerRepository,
    J: JobRepository,
    C: CandidateRepository,
    A: ApplicationRepository,
{
    pub fn new(
        employer_repo: Arc<E>,
        job_repo: Arc<J>,
        candidate_repo: Arc<C>,
        application_repo: Arc<A>,
    ) -> Self {
        Self {
            employer_repo,
            job_repo,
            candidate_repo,
            application_repo,
        }
    }

    /// Total counts per collection.
    pub async fn counts(&self, acting: &AuthUser) -> BoardResult<CollectionCounts> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;

        Ok(CollectionCounts {
            jobs: self.job_repo.count().await?,
            applications: self.application_repo.count().await?,
            candidates: self.candidate_repo.count().await?,
            employers: self.employer_repo.count().await?,
        })
    }

    /// Group-by over application status; only observed statuses appear.
    pub async fn status_breakdown(&self, acting: &AuthUser) -> BoardResult<Vec<StatusCount>> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;
        self.application_repo.status_breakdown().await
    }

    /// Jobs ranked by application volume, descending.
    pub async fn top_jobs_by_volume(
        &self,
        acting: &AuthUser,
        limit: Option<i64>,
    ) -> BoardResult<Vec<JobApplicationCount>> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;
        let limit = limit.unwrap_or(DEFAULT_TOP_JOBS_LIMIT).max(1);
        self.application_repo.top_jobs_by_volume(limit).await
    }

    /// Applications per (year, month) over the trailing six calendar
    /// months, including the current partial month. Sparse: months with
    /// zero applications are absent.
    pub async fn monthly_volume(&self, acting: &AuthUser) -> BoardResult<Vec<MonthlyCount>> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;
        let since = monthly_window_start(Utc::now());
        self.application_repo.monthly_volume(since).await
    }
}

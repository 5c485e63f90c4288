//! List Applications For Job Use Case
//!
//! Employer-facing view of a job's applications. Ownership is resolved
//! transitively: the authorization target is the job's employer.

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::JobId;

use crate::domain::entity::application::ApplicationDetail;
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::error::{BoardError, BoardResult};

/// List-for-job use case
pub struct ListForJobUseCase<J, A>
where
    J: JobRepository,
    A: ApplicationRepository,
{
    job_repo: Arc<J>,
    application_repo: Arc<A>,
}

impl<J, A> ListForJobUseCase<J, A>
where
    J: JobRepository,
    A: ApplicationRepository,
{
    pub fn new(job_repo: Arc<J>, application_repo: Arc<A>) -> Self {
        Self {
            job_repo,
            application_repo,
        }
    }

    pub async fn execute(
        &self,
        job_id: JobId,
        acting: &AuthUser,
    ) -> BoardResult<Vec<ApplicationDetail>> {
        let job = self
            .job_repo
            .find_by_id(&job_id)
            .await?
            .ok_or(BoardError::JobNotFound)?;

        Authorizer::authorize(
            acting,
            &[UserRole::Employer, UserRole::Admin],
            Some(job.employer_id),
        )?;

        // Sorted by applied_at descending, candidate and resume inline
        self.application_repo.list_for_job(&job.job_id).await
    }
}

//! Job Registry Use Cases
//!
//! Public reads, employer-scoped writes. The owning employer is always the
//! creator's affiliation; patches cannot move a job between employers.

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::JobId;

use crate::domain::entity::job::{Job, JobPatch};
use crate::domain::repository::{JobFilter, JobRepository, Page};
use crate::domain::value_object::job_type::JobType;
use crate::error::{BoardError, BoardResult};

/// Create job input
pub struct CreateJobInput {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: JobType,
    pub salary_range: Option<String>,
    pub tags: Vec<String>,
}

/// Job registry use cases
pub struct JobsUseCase<J>
where
    J: JobRepository,
{
    job_repo: Arc<J>,
}

impl<J> JobsUseCase<J>
where
    J: JobRepository,
{
    pub fn new(job_repo: Arc<J>) -> Self {
        Self { job_repo }
    }

    /// Create a job owned by the acting user's employer.
    pub async fn create(&self, acting: &AuthUser, input: CreateJobInput) -> BoardResult<Job> {
        Authorizer::require_role(acting, &[UserRole::Employer, UserRole::Admin])?;

        // employer_id comes from the affiliation, never the client
        let employer_id = acting
            .employer_id
            .ok_or(BoardError::EmployerProfileRequired)?;

        if input.title.is_empty() {
            return Err(BoardError::Validation("Title is required".to_string()));
        }

        let job = Job::new(
            employer_id,
            input.title,
            input.slug,
            input.description,
            input.location,
            input.job_type,
            input.salary_range,
            input.tags,
        );

        self.job_repo.create(&job).await?;

        tracing::info!(job_id = %job.job_id, employer_id = %employer_id, "Job created");

        Ok(job)
    }

    /// Public detail read.
    pub async fn get(&self, job_id: JobId) -> BoardResult<Job> {
        self.job_repo
            .find_by_id(&job_id)
            .await?
            .ok_or(BoardError::JobNotFound)
    }

    /// Public filtered listing (active jobs only), newest first.
    pub async fn list(&self, filter: &JobFilter, page: &Page) -> BoardResult<(Vec<Job>, i64)> {
        self.job_repo.list(filter, page).await
    }

    /// Owner-or-admin partial update.
    pub async fn update(
        &self,
        acting: &AuthUser,
        job_id: JobId,
        patch: JobPatch,
    ) -> BoardResult<Job> {
        let mut job = self
            .job_repo
            .find_by_id(&job_id)
            .await?
            .ok_or(BoardError::JobNotFound)?;

        Authorizer::authorize(
            acting,
            &[UserRole::Employer, UserRole::Admin],
            Some(job.employer_id),
        )?;

        job.apply_patch(patch);
        self.job_repo.update(&job).await?;

        Ok(job)
    }

    /// Owner-or-admin delete.
    pub async fn delete(&self, acting: &AuthUser, job_id: JobId) -> BoardResult<()> {
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

        self.job_repo.delete(&job.job_id).await?;

        tracing::info!(job_id = %job.job_id, user_id = %acting.user_id, "Job deleted");

        Ok(())
    }
}

//! Set Application Status Use Case
//!
//! Ownership-gated status overwrite. There is no transition graph: any
//! status may follow any other, and concurrent authorized updates are
//! last-write-wins.

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::ApplicationId;

use crate::domain::entity::application::Application;
use crate::domain::repository::{ApplicationRepository, JobRepository};
use crate::domain::value_object::application_status::ApplicationStatus;
use crate::error::{BoardError, BoardResult};

/// Set-status use case
pub struct SetStatusUseCase<J, A>
where
    J: JobRepository,
    A: ApplicationRepository,
{
    job_repo: Arc<J>,
    application_repo: Arc<A>,
}

impl<J, A> SetStatusUseCase<J, A>
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
        application_id: ApplicationId,
        new_status: ApplicationStatus,
        acting: &AuthUser,
    ) -> BoardResult<Application> {
        let mut application = self
            .application_repo
            .find_by_id(&application_id)
            .await?
            .ok_or(BoardError::ApplicationNotFound)?;

        // Ownership lives on the parent job's employer
        let job = self
            .job_repo
            .find_by_id(&application.job_id)
            .await?
            .ok_or(BoardError::JobNotFound)?;

        Authorizer::authorize(
            acting,
            &[UserRole::Employer, UserRole::Admin],
            Some(job.employer_id),
        )?;

        application.set_status(new_status);
        self.application_repo.update(&application).await?;

        tracing::info!(
            application_id = %application.application_id,
            status = %application.status,
            user_id = %acting.user_id,
            "Application status updated"
        );

        Ok(application)
    }
}

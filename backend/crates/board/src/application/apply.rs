//! Apply Use Case
//!
//! A candidate applies to a job. Candidates hold no accounts, so this
//! path takes no identity at all. The candidate record is found-or-created
//! by email; an existing candidate is reused as-is, this path never
//! updates profile fields.

use std::sync::Arc;

use auth::UserRepository;
use auth::models::Email;
use kernel::id::{JobId, ResumeId};

use crate::domain::entity::{
    application::Application, candidate::Candidate, job::Job, notification::Notification,
};
use crate::domain::repository::{
    ApplicationRepository, CandidateRepository, JobRepository, NotificationRepository,
    ResumeRepository,
};
use crate::error::{BoardError, BoardResult};

/// Candidate data submitted with an application
pub struct CandidateData {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
}

/// Apply input
pub struct ApplyInput {
    pub job_id: JobId,
    pub candidate: CandidateData,
    pub resume_id: Option<ResumeId>,
    pub cover_letter: Option<String>,
}

/// Apply use case
pub struct ApplyUseCase<J, C, A, R, N, U>
where
    J: JobRepository,
    C: CandidateRepository,
    A: ApplicationRepository,
    R: ResumeRepository,
    N: NotificationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    job_repo: Arc<J>,
    candidate_repo: Arc<C>,
    application_repo: Arc<A>,
    resume_repo: Arc<R>,
    notification_repo: Arc<N>,
    user_repo: Arc<U>,
}

impl<J, C, A, R, N, U> ApplyUseCase<J, C, A, R, N, U>
where
    J: JobRepository,
    C: CandidateRepository,
    A: ApplicationRepository,
    R: ResumeRepository,
    N: NotificationRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(
        job_repo: Arc<J>,
        candidate_repo: Arc<C>,
        application_repo: Arc<A>,
        resume_repo: Arc<R>,
        notification_repo: Arc<N>,
        user_repo: Arc<U>,
    ) -> Self {
        Self {
            job_repo,
            candidate_repo,
            application_repo,
            resume_repo,
            notification_repo,
            user_repo,
        }
    }

    pub async fn execute(&self, input: ApplyInput) -> BoardResult<Application> {
        let email = Email::new(input.candidate.email)
            .map_err(|e| BoardError::Validation(e.message().to_string()))?;

        let job = self
            .job_repo
            .find_by_id(&input.job_id)
            .await?
            .ok_or(BoardError::JobNotFound)?;

        // A supplied resume reference must exist before we link to it
        if let Some(resume_id) = &input.resume_id {
            self.resume_repo
                .find_by_id(resume_id)
                .await?
                .ok_or(BoardError::ResumeNotFound)?;
        }

        // Find-or-create; concurrent identical applies may race, in which
        // case the unique email index surfaces a retryable 409.
        let candidate = match self.candidate_repo.find_by_email(&email).await? {
            Some(existing) => existing,
            None => {
                let name = input
                    .candidate
                    .name
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| {
                        BoardError::Validation("Candidate name required".to_string())
                    })?;
                let candidate = Candidate::new(
                    email,
                    name,
                    input.candidate.phone,
                    input.candidate.location,
                    input.candidate.profile,
                );
                self.candidate_repo.create(&candidate).await?;
                candidate
            }
        };

        let application = Application::new(
            job.job_id,
            candidate.candidate_id,
            input.resume_id,
            input.cover_letter,
        );

        self.application_repo.create(&application).await?;

        tracing::info!(
            application_id = %application.application_id,
            job_id = %job.job_id,
            candidate_id = %candidate.candidate_id,
            "Application submitted"
        );

        self.notify_job_owner(&job, &candidate);

        Ok(application)
    }

    /// Notify the owning employer's users. Fire-and-forget: delivery
    /// failure is logged and never fails the request.
    fn notify_job_owner(&self, job: &Job, candidate: &Candidate) {
        let users = self.user_repo.clone();
        let notifications = self.notification_repo.clone();
        let employer_id = job.employer_id;
        let job_id = job.job_id;
        let title = format!("New application for {}", job.title);
        let body = format!("{} applied to {}", candidate.name, job.title);

        tokio::spawn(async move {
            let recipients = match users.find_by_employer_id(&employer_id).await {
                Ok(recipients) => recipients,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to resolve notification recipients");
                    return;
                }
            };

            for recipient in recipients {
                let note = Notification::new(
                    recipient.user_id,
                    title.clone(),
                    Some(body.clone()),
                    Some(serde_json::json!({ "jobId": job_id.into_uuid() })),
                );
                if let Err(e) = notifications.create(&note).await {
                    tracing::warn!(error = %e, "Failed to create notification");
                }
            }
        });
    }
}

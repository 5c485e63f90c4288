//! Repository Traits
//!
//! Interfaces for board persistence, one per aggregate. Implementations
//! live in the infrastructure layer; a single store type may implement
//! them all.

use auth::models::Email;
use chrono::{DateTime, Utc};
use kernel::id::{ApplicationId, CandidateId, EmployerId, JobId, NotificationId, ResumeId, UserId};

use crate::domain::entity::{
    application::{Application, ApplicationDetail},
    candidate::Candidate,
    employer::Employer,
    job::Job,
    notification::Notification,
    resume::Resume,
};
use crate::domain::report::{JobApplicationCount, MonthlyCount, StatusCount};
use crate::error::BoardResult;

// ============================================================================
// Query Parameters
// ============================================================================

/// Filters for the public job listing
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Tag membership
    pub tag: Option<String>,
    /// Location equality
    pub location: Option<String>,
    /// Free-text search over title and description
    pub text: Option<String>,
}

/// Offset pagination, clamped at construction (request-clamped, the store
/// never sees out-of-range values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// Clamp raw query values: page >= 1, 1 <= limit <= 100.
    pub fn clamped(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::clamped(None, None)
    }
}

// ============================================================================
// Repository Traits
// ============================================================================

/// Employer repository trait
#[trait_variant::make(EmployerRepository: Send)]
pub trait LocalEmployerRepository {
    async fn create(&self, employer: &Employer) -> BoardResult<()>;

    async fn find_by_id(&self, employer_id: &EmployerId) -> BoardResult<Option<Employer>>;

    /// All employers, newest first
    async fn list(&self) -> BoardResult<Vec<Employer>>;

    async fn update(&self, employer: &Employer) -> BoardResult<()>;

    async fn delete(&self, employer_id: &EmployerId) -> BoardResult<()>;

    async fn count(&self) -> BoardResult<i64>;
}

/// Job repository trait
#[trait_variant::make(JobRepository: Send)]
pub trait LocalJobRepository {
    async fn create(&self, job: &Job) -> BoardResult<()>;

    async fn find_by_id(&self, job_id: &JobId) -> BoardResult<Option<Job>>;

    async fn update(&self, job: &Job) -> BoardResult<()>;

    async fn delete(&self, job_id: &JobId) -> BoardResult<()>;

    /// Active jobs matching the filter, newest first, with the total match
    /// count for the pagination envelope
    async fn list(&self, filter: &JobFilter, page: &Page) -> BoardResult<(Vec<Job>, i64)>;

    async fn count(&self) -> BoardResult<i64>;
}

/// Candidate repository trait
#[trait_variant::make(CandidateRepository: Send)]
pub trait LocalCandidateRepository {
    async fn create(&self, candidate: &Candidate) -> BoardResult<()>;

    async fn update(&self, candidate: &Candidate) -> BoardResult<()>;

    async fn find_by_id(&self, candidate_id: &CandidateId) -> BoardResult<Option<Candidate>>;

    /// Lookup by the unique email key (emails are stored lowercase)
    async fn find_by_email(&self, email: &Email) -> BoardResult<Option<Candidate>>;

    /// Newest-first listing with optional free-text filter over
    /// name/email/profile, capped at 100 rows
    async fn search(&self, text: Option<&str>) -> BoardResult<Vec<Candidate>>;

    async fn count(&self) -> BoardResult<i64>;
}

/// Resume repository trait
#[trait_variant::make(ResumeRepository: Send)]
pub trait LocalResumeRepository {
    async fn find_by_id(&self, resume_id: &ResumeId) -> BoardResult<Option<Resume>>;
}

/// Application repository trait
#[trait_variant::make(ApplicationRepository: Send)]
pub trait LocalApplicationRepository {
    async fn create(&self, application: &Application) -> BoardResult<()>;

    async fn find_by_id(
        &self,
        application_id: &ApplicationId,
    ) -> BoardResult<Option<Application>>;

    async fn update(&self, application: &Application) -> BoardResult<()>;

    /// A job's applications with candidate and resume resolved inline,
    /// most recent first
    async fn list_for_job(&self, job_id: &JobId) -> BoardResult<Vec<ApplicationDetail>>;

    async fn count(&self) -> BoardResult<i64>;

    /// Group-by over status; one row per observed status
    async fn status_breakdown(&self) -> BoardResult<Vec<StatusCount>>;

    /// Jobs ranked by application volume, descending
    async fn top_jobs_by_volume(&self, limit: i64) -> BoardResult<Vec<JobApplicationCount>>;

    /// Applications grouped by (year, month) since the given instant,
    /// chronological; months with no applications produce no row
    async fn monthly_volume(&self, since: DateTime<Utc>) -> BoardResult<Vec<MonthlyCount>>;
}

/// Notification repository trait
#[trait_variant::make(NotificationRepository: Send)]
pub trait LocalNotificationRepository {
    async fn create(&self, notification: &Notification) -> BoardResult<()>;

    async fn find_by_id(
        &self,
        notification_id: &NotificationId,
    ) -> BoardResult<Option<Notification>>;

    async fn update(&self, notification: &Notification) -> BoardResult<()>;

    /// A recipient's notifications, newest first
    async fn list_for_user(&self, user_id: &UserId) -> BoardResult<Vec<Notification>>;
}

/// Everything the board handlers need from one store value.
pub trait BoardRepository:
    EmployerRepository
    + JobRepository
    + CandidateRepository
    + ResumeRepository
    + ApplicationRepository
    + NotificationRepository
{
}

impl<T> BoardRepository for T where
    T: EmployerRepository
        + JobRepository
        + CandidateRepository
        + ResumeRepository
        + ApplicationRepository
        + NotificationRepository
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_clamping() {
        assert_eq!(Page::clamped(None, None), Page { page: 1, limit: 20 });
        assert_eq!(Page::clamped(Some(0), None), Page { page: 1, limit: 20 });
        assert_eq!(
            Page::clamped(Some(3), Some(50)),
            Page { page: 3, limit: 50 }
        );
        assert_eq!(
            Page::clamped(Some(2), Some(500)),
            Page { page: 2, limit: 100 }
        );
        assert_eq!(Page::clamped(None, Some(0)), Page { page: 1, limit: 1 });
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(Page { page: 1, limit: 20 }.offset(), 0);
        assert_eq!(Page { page: 3, limit: 20 }.offset(), 40);
    }
}

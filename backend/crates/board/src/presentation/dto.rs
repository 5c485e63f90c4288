//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{
    application::{Application, ApplicationDetail},
    candidate::Candidate,
    employer::Employer,
    job::Job,
    notification::Notification,
    resume::Resume,
};
use crate::domain::report::{
    CollectionCounts, JobApplicationCount, MonthlyCount, StatusCount,
};
use crate::domain::value_object::{application_status::ApplicationStatus, job_type::JobType};

// ============================================================================
// Pagination
// ============================================================================

/// Envelope for paginated listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub items: Vec<T>,
}

// ============================================================================
// Jobs
// ============================================================================

/// Public job listing query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    pub tag: Option<String>,
    pub location: Option<String>,
    /// Free-text search
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Create job request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial job update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Job response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_range: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.job_id.into_uuid(),
            employer_id: job.employer_id.into_uuid(),
            title: job.title,
            slug: job.slug,
            description: job.description,
            location: job.location,
            job_type: job.job_type,
            salary_range: job.salary_range,
            tags: job.tags,
            is_active: job.is_active,
            created_at: job.created_at,
            closed_at: job.closed_at,
        }
    }
}

// ============================================================================
// Employers
// ============================================================================

/// Create employer request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployerRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

/// Partial employer update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployerRequest {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

/// Employer response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerResponse {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Employer> for EmployerResponse {
    fn from(employer: Employer) -> Self {
        Self {
            id: employer.employer_id.into_uuid(),
            name: employer.name,
            website: employer.website,
            description: employer.description,
            contact_email: employer.contact_email,
            created_at: employer.created_at,
        }
    }
}

// ============================================================================
// Candidates
// ============================================================================

/// Candidate listing query
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateListQuery {
    pub q: Option<String>,
}

/// Public candidate upsert request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCandidateRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
}

/// Candidate response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.candidate_id.into_uuid(),
            email: candidate.email.into_db(),
            name: candidate.name,
            phone: candidate.phone,
            location: candidate.location,
            profile: candidate.profile,
            created_at: candidate.created_at,
        }
    }
}

// ============================================================================
// Applications
// ============================================================================

/// Apply request (public)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_id: Option<Uuid>,
    pub candidate_data: Option<CandidateDataDto>,
    pub resume_id: Option<Uuid>,
    pub cover_letter: Option<String>,
}

/// Candidate fields submitted with an application
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDataDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
}

/// Status update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub status: Option<ApplicationStatus>,
}

/// Application response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub resume_id: Option<Uuid>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub seen: bool,
    pub applied_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.application_id.into_uuid(),
            job_id: application.job_id.into_uuid(),
            candidate_id: application.candidate_id.into_uuid(),
            resume_id: application.resume_id.map(|id| id.into_uuid()),
            cover_letter: application.cover_letter,
            status: application.status,
            seen: application.seen,
            applied_at: application.applied_at,
        }
    }
}

/// Resume response (embedded in application listings)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub filename: Option<String>,
    pub content: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Resume> for ResumeResponse {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.resume_id.into_uuid(),
            candidate_id: resume.candidate_id.into_uuid(),
            filename: resume.filename,
            content: resume.content,
            uploaded_at: resume.uploaded_at,
        }
    }
}

/// Application with candidate and resume resolved inline
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetailResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub candidate: CandidateResponse,
    pub resume: Option<ResumeResponse>,
}

impl From<ApplicationDetail> for ApplicationDetailResponse {
    fn from(detail: ApplicationDetail) -> Self {
        Self {
            application: ApplicationResponse::from(detail.application),
            candidate: CandidateResponse::from(detail.candidate),
            resume: detail.resume.map(ResumeResponse::from),
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Admin notification create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub user_id: Option<Uuid>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Notification response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.notification_id.into_uuid(),
            user_id: notification.user_id.into_uuid(),
            title: notification.title,
            body: notification.body,
            data: notification.data,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}

// ============================================================================
// Admin Reports
// ============================================================================

/// Per-collection totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsResponse {
    pub jobs: i64,
    pub applications: i64,
    pub candidates: i64,
    pub employers: i64,
}

impl From<CollectionCounts> for CountsResponse {
    fn from(counts: CollectionCounts) -> Self {
        Self {
            jobs: counts.jobs,
            applications: counts.applications,
            candidates: counts.candidates,
            employers: counts.employers,
        }
    }
}

/// One status group-by row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountResponse {
    pub status: ApplicationStatus,
    pub count: i64,
}

impl From<StatusCount> for StatusCountResponse {
    fn from(row: StatusCount) -> Self {
        Self {
            status: row.status,
            count: row.count,
        }
    }
}

/// One per-job volume row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopJobResponse {
    pub job_id: Uuid,
    pub title: String,
    pub count: i64,
}

impl From<JobApplicationCount> for TopJobResponse {
    fn from(row: JobApplicationCount) -> Self {
        Self {
            job_id: row.job_id.into_uuid(),
            title: row.title,
            count: row.count,
        }
    }
}

/// One monthly volume row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCountResponse {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

impl From<MonthlyCount> for MonthlyCountResponse {
    fn from(row: MonthlyCount) -> Self {
        Self {
            year: row.year,
            month: row.month,
            count: row.count,
        }
    }
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { message: "Deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

//! PostgreSQL Repository Implementations

use auth::models::Email;
use chrono::{DateTime, Utc};
use kernel::id::{
    ApplicationId, CandidateId, EmployerId, JobId, NotificationId, ResumeId, UserId,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    application::{Application, ApplicationDetail},
    candidate::Candidate,
    employer::Employer,
    job::Job,
    notification::Notification,
    resume::Resume,
};
use crate::domain::report::{JobApplicationCount, MonthlyCount, StatusCount};
use crate::domain::repository::{
    ApplicationRepository, CandidateRepository, EmployerRepository, JobFilter, JobRepository,
    NotificationRepository, Page, ResumeRepository,
};
use crate::domain::value_object::{application_status::ApplicationStatus, job_type::JobType};
use crate::error::BoardResult;

/// PostgreSQL-backed repository for all board aggregates
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Employer Repository Implementation
// ============================================================================

impl EmployerRepository for PgBoardRepository {
    async fn create(&self, employer: &Employer) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employers (
                employer_id,
                name,
                website,
                description,
                contact_email,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(employer.employer_id.as_uuid())
        .bind(&employer.name)
        .bind(employer.website.as_deref())
        .bind(employer.description.as_deref())
        .bind(employer.contact_email.as_deref())
        .bind(employer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, employer_id: &EmployerId) -> BoardResult<Option<Employer>> {
        let row = sqlx::query_as::<_, EmployerRow>(
            r#"
            SELECT employer_id, name, website, description, contact_email, created_at
            FROM employers
            WHERE employer_id = $1
            "#,
        )
        .bind(employer_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployerRow::into_employer))
    }

    async fn list(&self) -> BoardResult<Vec<Employer>> {
        let rows = sqlx::query_as::<_, EmployerRow>(
            r#"
            SELECT employer_id, name, website, description, contact_email, created_at
            FROM employers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmployerRow::into_employer).collect())
    }

    async fn update(&self, employer: &Employer) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE employers
            SET name = $2, website = $3, description = $4, contact_email = $5
            WHERE employer_id = $1
            "#,
        )
        .bind(employer.employer_id.as_uuid())
        .bind(&employer.name)
        .bind(employer.website.as_deref())
        .bind(employer.description.as_deref())
        .bind(employer.contact_email.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, employer_id: &EmployerId) -> BoardResult<()> {
        sqlx::query("DELETE FROM employers WHERE employer_id = $1")
            .bind(employer_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> BoardResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// ============================================================================
// Job Repository Implementation
// ============================================================================

impl JobRepository for PgBoardRepository {
    async fn create(&self, job: &Job) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (
                job_id,
                employer_id,
                title,
                slug,
                description,
                location,
                job_type,
                salary_range,
                tags,
                is_active,
                created_at,
                closed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(job.job_id.as_uuid())
        .bind(job.employer_id.as_uuid())
        .bind(&job.title)
        .bind(&job.slug)
        .bind(job.description.as_deref())
        .bind(job.location.as_deref())
        .bind(job.job_type.id())
        .bind(job.salary_range.as_deref())
        .bind(&job.tags)
        .bind(job.is_active)
        .bind(job.created_at)
        .bind(job.closed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, job_id: &JobId) -> BoardResult<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT
                job_id, employer_id, title, slug, description, location,
                job_type, salary_range, tags, is_active, created_at, closed_at
            FROM jobs
            WHERE job_id = $1
            "#,
        )
        .bind(job_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobRow::into_job))
    }

    async fn update(&self, job: &Job) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET title = $2, slug = $3, description = $4, location = $5,
                job_type = $6, salary_range = $7, tags = $8, is_active = $9,
                closed_at = $10
            WHERE job_id = $1
            "#,
        )
        .bind(job.job_id.as_uuid())
        .bind(&job.title)
        .bind(&job.slug)
        .bind(job.description.as_deref())
        .bind(job.location.as_deref())
        .bind(job.job_type.id())
        .bind(job.salary_range.as_deref())
        .bind(&job.tags)
        .bind(job.is_active)
        .bind(job.closed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, job_id: &JobId) -> BoardResult<()> {
        sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(job_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self, filter: &JobFilter, page: &Page) -> BoardResult<(Vec<Job>, i64)> {
        // Static SQL with nullable filter binds; absent filters collapse to
        // always-true disjuncts.
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT
                job_id, employer_id, title, slug, description, location,
                job_type, salary_range, tags, is_active, created_at, closed_at
            FROM jobs
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR $1 = ANY(tags))
              AND ($2::text IS NULL OR location = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filter.tag.as_deref())
        .bind(filter.location.as_deref())
        .bind(filter.text.as_deref())
        .bind(page.limit as i64)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM jobs
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR $1 = ANY(tags))
              AND ($2::text IS NULL OR location = $2)
              AND ($3::text IS NULL
                   OR title ILIKE '%' || $3 || '%'
                   OR description ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(filter.tag.as_deref())
        .bind(filter.location.as_deref())
        .bind(filter.text.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(JobRow::into_job).collect(), total))
    }

    async fn count(&self) -> BoardResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// ============================================================================
// Candidate Repository Implementation
// ============================================================================

impl CandidateRepository for PgBoardRepository {
    async fn create(&self, candidate: &Candidate) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO candidates (
                candidate_id,
                email,
                name,
                phone,
                location,
                profile,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(candidate.candidate_id.as_uuid())
        .bind(candidate.email.as_str())
        .bind(&candidate.name)
        .bind(candidate.phone.as_deref())
        .bind(candidate.location.as_deref())
        .bind(candidate.profile.as_deref())
        .bind(candidate.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, candidate: &Candidate) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE candidates
            SET name = $2, phone = $3, location = $4, profile = $5
            WHERE candidate_id = $1
            "#,
        )
        .bind(candidate.candidate_id.as_uuid())
        .bind(&candidate.name)
        .bind(candidate.phone.as_deref())
        .bind(candidate.location.as_deref())
        .bind(candidate.profile.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, candidate_id: &CandidateId) -> BoardResult<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT candidate_id, email, name, phone, location, profile, created_at
            FROM candidates
            WHERE candidate_id = $1
            "#,
        )
        .bind(candidate_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CandidateRow::into_candidate))
    }

    async fn find_by_email(&self, email: &Email) -> BoardResult<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT candidate_id, email, name, phone, location, profile, created_at
            FROM candidates
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CandidateRow::into_candidate))
    }

    async fn search(&self, text: Option<&str>) -> BoardResult<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT candidate_id, email, name, phone, location, profile, created_at
            FROM candidates
            WHERE ($1::text IS NULL
                   OR name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%'
                   OR profile ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT 100
            "#,
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CandidateRow::into_candidate).collect())
    }

    async fn count(&self) -> BoardResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM candidates")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// ============================================================================
// Resume Repository Implementation
// ============================================================================

impl ResumeRepository for PgBoardRepository {
    async fn find_by_id(&self, resume_id: &ResumeId) -> BoardResult<Option<Resume>> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            SELECT resume_id, candidate_id, filename, content, uploaded_at
            FROM resumes
            WHERE resume_id = $1
            "#,
        )
        .bind(resume_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ResumeRow::into_resume))
    }
}

// ============================================================================
// Application Repository Implementation
// ============================================================================

impl ApplicationRepository for PgBoardRepository {
    async fn create(&self, application: &Application) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO applications (
                application_id,
                job_id,
                candidate_id,
                resume_id,
                cover_letter,
                status,
                seen,
                applied_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(application.application_id.as_uuid())
        .bind(application.job_id.as_uuid())
        .bind(application.candidate_id.as_uuid())
        .bind(application.resume_id.map(|id| id.into_uuid()))
        .bind(application.cover_letter.as_deref())
        .bind(application.status.id())
        .bind(application.seen)
        .bind(application.applied_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        application_id: &ApplicationId,
    ) -> BoardResult<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT
                application_id, job_id, candidate_id, resume_id,
                cover_letter, status, seen, applied_at
            FROM applications
            WHERE application_id = $1
            "#,
        )
        .bind(application_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ApplicationRow::into_application))
    }

    async fn update(&self, application: &Application) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE applications
            SET status = $2, seen = $3
            WHERE application_id = $1
            "#,
        )
        .bind(application.application_id.as_uuid())
        .bind(application.status.id())
        .bind(application.seen)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_job(&self, job_id: &JobId) -> BoardResult<Vec<ApplicationDetail>> {
        let rows = sqlx::query_as::<_, ApplicationDetailRow>(
            r#"
            SELECT
                a.application_id, a.job_id, a.candidate_id, a.resume_id,
                a.cover_letter, a.status, a.seen, a.applied_at,
                c.email AS candidate_email,
                c.name AS candidate_name,
                c.phone AS candidate_phone,
                c.location AS candidate_location,
                c.profile AS candidate_profile,
                c.created_at AS candidate_created_at,
                r.resume_id AS resume_resume_id,
                r.candidate_id AS resume_candidate_id,
                r.filename AS resume_filename,
                r.content AS resume_content,
                r.uploaded_at AS resume_uploaded_at
            FROM applications a
            JOIN candidates c ON c.candidate_id = a.candidate_id
            LEFT JOIN resumes r ON r.resume_id = a.resume_id
            WHERE a.job_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(job_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ApplicationDetailRow::into_detail).collect())
    }

    async fn count(&self) -> BoardResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn status_breakdown(&self) -> BoardResult<Vec<StatusCount>> {
        let rows = sqlx::query_as::<_, (i16, i64)>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM applications
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount {
                status: ApplicationStatus::from_id(status),
                count,
            })
            .collect())
    }

    async fn top_jobs_by_volume(&self, limit: i64) -> BoardResult<Vec<JobApplicationCount>> {
        let rows = sqlx::query_as::<_, (Uuid, String, i64)>(
            r#"
            SELECT a.job_id, j.title, COUNT(*) AS count
            FROM applications a
            JOIN jobs j ON j.job_id = a.job_id
            GROUP BY a.job_id, j.title
            ORDER BY count DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(job_id, title, count)| JobApplicationCount {
                job_id: JobId::from_uuid(job_id),
                title,
                count,
            })
            .collect())
    }

    async fn monthly_volume(&self, since: DateTime<Utc>) -> BoardResult<Vec<MonthlyCount>> {
        let rows = sqlx::query_as::<_, (i32, i32, i64)>(
            r#"
            SELECT
                EXTRACT(YEAR FROM applied_at)::int4 AS year,
                EXTRACT(MONTH FROM applied_at)::int4 AS month,
                COUNT(*) AS count
            FROM applications
            WHERE applied_at >= $1
            GROUP BY 1, 2
            ORDER BY 1, 2
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(year, month, count)| MonthlyCount {
                year,
                month: month as u32,
                count,
            })
            .collect())
    }
}

// ============================================================================
// Notification Repository Implementation
// ============================================================================

impl NotificationRepository for PgBoardRepository {
    async fn create(&self, notification: &Notification) -> BoardResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                notification_id,
                user_id,
                title,
                body,
                data,
                read,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(notification.notification_id.as_uuid())
        .bind(notification.user_id.as_uuid())
        .bind(&notification.title)
        .bind(notification.body.as_deref())
        .bind(notification.data.as_ref())
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        notification_id: &NotificationId,
    ) -> BoardResult<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT notification_id, user_id, title, body, data, read, created_at
            FROM notifications
            WHERE notification_id = $1
            "#,
        )
        .bind(notification_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NotificationRow::into_notification))
    }

    async fn update(&self, notification: &Notification) -> BoardResult<()> {
        sqlx::query(
            r#"
            UPDATE notifications
            SET read = $2
            WHERE notification_id = $1
            "#,
        )
        .bind(notification.notification_id.as_uuid())
        .bind(notification.read)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> BoardResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT notification_id, user_id, title, body, data, read, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(NotificationRow::into_notification)
            .collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct EmployerRow {
    employer_id: Uuid,
    name: String,
    website: Option<String>,
    description: Option<String>,
    contact_email: Option<String>,
    created_at: DateTime<Utc>,
}

impl EmployerRow {
    fn into_employer(self) -> Employer {
        Employer {
            employer_id: EmployerId::from_uuid(self.employer_id),
            name: self.name,
            website: self.website,
            description: self.description,
            contact_email: self.contact_email,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct JobRow {
    job_id: Uuid,
    employer_id: Uuid,
    title: String,
    slug: String,
    description: Option<String>,
    location: Option<String>,
    job_type: i16,
    salary_range: Option<String>,
    tags: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            job_id: JobId::from_uuid(self.job_id),
            employer_id: EmployerId::from_uuid(self.employer_id),
            title: self.title,
            slug: self.slug,
            description: self.description,
            location: self.location,
            job_type: JobType::from_id(self.job_type),
            salary_range: self.salary_range,
            tags: self.tags,
            is_active: self.is_active,
            created_at: self.created_at,
            closed_at: self.closed_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CandidateRow {
    candidate_id: Uuid,
    email: String,
    name: String,
    phone: Option<String>,
    location: Option<String>,
    profile: Option<String>,
    created_at: DateTime<Utc>,
}

impl CandidateRow {
    fn into_candidate(self) -> Candidate {
        Candidate {
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            email: Email::from_db(self.email),
            name: self.name,
            phone: self.phone,
            location: self.location,
            profile: self.profile,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ResumeRow {
    resume_id: Uuid,
    candidate_id: Uuid,
    filename: Option<String>,
    content: Option<String>,
    uploaded_at: DateTime<Utc>,
}

impl ResumeRow {
    fn into_resume(self) -> Resume {
        Resume {
            resume_id: ResumeId::from_uuid(self.resume_id),
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            filename: self.filename,
            content: self.content,
            uploaded_at: self.uploaded_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ApplicationRow {
    application_id: Uuid,
    job_id: Uuid,
    candidate_id: Uuid,
    resume_id: Option<Uuid>,
    cover_letter: Option<String>,
    status: i16,
    seen: bool,
    applied_at: DateTime<Utc>,
}

impl ApplicationRow {
    fn into_application(self) -> Application {
        Application {
            application_id: ApplicationId::from_uuid(self.application_id),
            job_id: JobId::from_uuid(self.job_id),
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            resume_id: self.resume_id.map(ResumeId::from_uuid),
            cover_letter: self.cover_letter,
            status: ApplicationStatus::from_id(self.status),
            seen: self.seen,
            applied_at: self.applied_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ApplicationDetailRow {
    application_id: Uuid,
    job_id: Uuid,
    candidate_id: Uuid,
    resume_id: Option<Uuid>,
    cover_letter: Option<String>,
    status: i16,
    seen: bool,
    applied_at: DateTime<Utc>,
    candidate_email: String,
    candidate_name: String,
    candidate_phone: Option<String>,
    candidate_location: Option<String>,
    candidate_profile: Option<String>,
    candidate_created_at: DateTime<Utc>,
    resume_resume_id: Option<Uuid>,
    resume_candidate_id: Option<Uuid>,
    resume_filename: Option<String>,
    resume_content: Option<String>,
    resume_uploaded_at: Option<DateTime<Utc>>,
}

impl ApplicationDetailRow {
    fn into_detail(self) -> ApplicationDetail {
        let application = Application {
            application_id: ApplicationId::from_uuid(self.application_id),
            job_id: JobId::from_uuid(self.job_id),
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            resume_id: self.resume_id.map(ResumeId::from_uuid),
            cover_letter: self.cover_letter,
            status: ApplicationStatus::from_id(self.status),
            seen: self.seen,
            applied_at: self.applied_at,
        };

        let candidate = Candidate {
            candidate_id: CandidateId::from_uuid(self.candidate_id),
            email: Email::from_db(self.candidate_email),
            name: self.candidate_name,
            phone: self.candidate_phone,
            location: self.candidate_location,
            profile: self.candidate_profile,
            created_at: self.candidate_created_at,
        };

        // The resume is present only when the LEFT JOIN matched
        let resume = match (
            self.resume_resume_id,
            self.resume_candidate_id,
            self.resume_uploaded_at,
        ) {
            (Some(resume_id), Some(candidate_id), Some(uploaded_at)) => Some(Resume {
                resume_id: ResumeId::from_uuid(resume_id),
                candidate_id: CandidateId::from_uuid(candidate_id),
                filename: self.resume_filename,
                content: self.resume_content,
                uploaded_at,
            }),
            _ => None,
        };

        ApplicationDetail {
            application,
            candidate,
            resume,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    notification_id: Uuid,
    user_id: Uuid,
    title: String,
    body: Option<String>,
    data: Option<serde_json::Value>,
    read: bool,
    created_at: DateTime<Utc>,
}

impl NotificationRow {
    fn into_notification(self) -> Notification {
        Notification {
            notification_id: NotificationId::from_uuid(self.notification_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            body: self.body,
            data: self.data,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

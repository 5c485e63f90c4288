//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::{AuthUser, UserRepository};
use kernel::id::{ApplicationId, CandidateId, EmployerId, JobId, NotificationId, ResumeId, UserId};

use crate::application::candidates::UpsertCandidateInput;
use crate::application::{
    ApplyInput, ApplyUseCase, CandidateData, CandidatesUseCase, CreateJobInput, EmployersUseCase,
    JobsUseCase, ListForJobUseCase, NotificationsUseCase, ReportingUseCase, SetStatusUseCase,
};
use crate::domain::entity::employer::EmployerPatch;
use crate::domain::entity::job::JobPatch;
use crate::domain::repository::{BoardRepository, JobFilter, Page};
use crate::error::{BoardError, BoardResult};
use crate::presentation::dto::{
    ApplicationDetailResponse, ApplicationResponse, ApplyRequest, CandidateListQuery,
    CandidateResponse, CountsResponse, CreateEmployerRequest, CreateJobRequest,
    CreateNotificationRequest, DeletedResponse, EmployerResponse, JobListQuery, JobResponse,
    MonthlyCountResponse, NotificationResponse, Paginated, SetStatusRequest,
    StatusCountResponse, TopJobResponse, UpdateEmployerRequest, UpdateJobRequest,
    UpsertCandidateRequest,
};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<R, U>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub users: Arc<U>,
}

// ============================================================================
// Jobs
// ============================================================================

/// GET /api/jobs
pub async fn list_jobs<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Query(query): Query<JobListQuery>,
) -> BoardResult<Json<Paginated<JobResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = JobsUseCase::new(state.repo.clone());

    let filter = JobFilter {
        tag: query.tag,
        location: query.location,
        text: query.q,
    };
    let page = Page::clamped(query.page, query.limit);

    let (jobs, total) = use_case.list(&filter, &page).await?;

    Ok(Json(Paginated {
        page: page.page,
        limit: page.limit,
        total,
        items: jobs.into_iter().map(JobResponse::from).collect(),
    }))
}

/// GET /api/jobs/{id}
pub async fn get_job<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<JobResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = JobsUseCase::new(state.repo.clone());
    let job = use_case.get(JobId::from_uuid(id)).await?;
    Ok(Json(JobResponse::from(job)))
}

/// POST /api/jobs
pub async fn create_job<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateJobRequest>,
) -> BoardResult<impl IntoResponse>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = JobsUseCase::new(state.repo.clone());

    let input = CreateJobInput {
        title: req.title.unwrap_or_default(),
        slug: req.slug,
        description: req.description,
        location: req.location,
        job_type: req.job_type.unwrap_or_default(),
        salary_range: req.salary_range,
        tags: req.tags.unwrap_or_default(),
    };

    let job = use_case.create(&user, input).await?;

    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

/// PATCH /api/jobs/{id}
pub async fn update_job<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> BoardResult<Json<JobResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = JobsUseCase::new(state.repo.clone());

    let patch = JobPatch {
        title: req.title,
        slug: req.slug,
        description: req.description,
        location: req.location,
        job_type: req.job_type,
        salary_range: req.salary_range,
        tags: req.tags,
        is_active: req.is_active,
        closed_at: req.closed_at,
    };

    let job = use_case.update(&user, JobId::from_uuid(id), patch).await?;

    Ok(Json(JobResponse::from(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<DeletedResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = JobsUseCase::new(state.repo.clone());
    use_case.delete(&user, JobId::from_uuid(id)).await?;
    Ok(Json(DeletedResponse::new()))
}

// ============================================================================
// Employers
// ============================================================================

/// GET /api/employers
pub async fn list_employers<R, U>(
    State(state): State<BoardAppState<R, U>>,
) -> BoardResult<Json<Vec<EmployerResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployersUseCase::new(state.repo.clone());
    let employers = use_case.list().await?;
    Ok(Json(
        employers.into_iter().map(EmployerResponse::from).collect(),
    ))
}

/// GET /api/employers/{id}
pub async fn get_employer<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<EmployerResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployersUseCase::new(state.repo.clone());
    let employer = use_case.get(EmployerId::from_uuid(id)).await?;
    Ok(Json(EmployerResponse::from(employer)))
}

/// POST /api/employers
pub async fn create_employer<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateEmployerRequest>,
) -> BoardResult<impl IntoResponse>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployersUseCase::new(state.repo.clone());

    let employer = use_case
        .create(
            &user,
            req.name.unwrap_or_default(),
            req.website,
            req.description,
            req.contact_email,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(EmployerResponse::from(employer))))
}

/// PATCH /api/employers/{id}
pub async fn update_employer<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEmployerRequest>,
) -> BoardResult<Json<EmployerResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployersUseCase::new(state.repo.clone());

    let patch = EmployerPatch {
        name: req.name,
        website: req.website,
        description: req.description,
        contact_email: req.contact_email,
    };

    let employer = use_case
        .update(&user, EmployerId::from_uuid(id), patch)
        .await?;

    Ok(Json(EmployerResponse::from(employer)))
}

/// DELETE /api/employers/{id}
pub async fn delete_employer<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<DeletedResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = EmployersUseCase::new(state.repo.clone());
    use_case.delete(&user, EmployerId::from_uuid(id)).await?;
    Ok(Json(DeletedResponse::new()))
}

// ============================================================================
// Candidates
// ============================================================================

/// POST /api/candidates (public upsert)
pub async fn upsert_candidate<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Json(req): Json<UpsertCandidateRequest>,
) -> BoardResult<impl IntoResponse>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let (email, name) = match (req.email, req.name) {
        (Some(email), Some(name)) if !email.is_empty() && !name.is_empty() => (email, name),
        _ => {
            return Err(BoardError::Validation(
                "Name and email required".to_string(),
            ));
        }
    };

    let use_case = CandidatesUseCase::new(state.repo.clone());

    let (candidate, created) = use_case
        .upsert(UpsertCandidateInput {
            email,
            name,
            phone: req.phone,
            location: req.location,
            profile: req.profile,
        })
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(CandidateResponse::from(candidate))))
}

/// GET /api/candidates
pub async fn list_candidates<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<CandidateListQuery>,
) -> BoardResult<Json<Vec<CandidateResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CandidatesUseCase::new(state.repo.clone());
    let candidates = use_case.list(&user, query.q.as_deref()).await?;
    Ok(Json(
        candidates.into_iter().map(CandidateResponse::from).collect(),
    ))
}

/// GET /api/candidates/{id}
pub async fn get_candidate<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<CandidateResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CandidatesUseCase::new(state.repo.clone());
    let candidate = use_case.get(&user, CandidateId::from_uuid(id)).await?;
    Ok(Json(CandidateResponse::from(candidate)))
}

// ============================================================================
// Applications
// ============================================================================

/// POST /api/applications (public; candidates hold no accounts)
pub async fn apply<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Json(req): Json<ApplyRequest>,
) -> BoardResult<impl IntoResponse>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let (job_id, candidate_data) = match (req.job_id, req.candidate_data) {
        (Some(job_id), Some(candidate_data)) => (job_id, candidate_data),
        _ => {
            return Err(BoardError::Validation(
                "jobId and candidateData required".to_string(),
            ));
        }
    };

    let email = match candidate_data.email {
        Some(email) if !email.is_empty() => email,
        _ => {
            return Err(BoardError::Validation(
                "Candidate email required".to_string(),
            ));
        }
    };

    let use_case = ApplyUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.users.clone(),
    );

    let input = ApplyInput {
        job_id: JobId::from_uuid(job_id),
        candidate: CandidateData {
            email,
            name: candidate_data.name,
            phone: candidate_data.phone,
            location: candidate_data.location,
            profile: candidate_data.profile,
        },
        resume_id: req.resume_id.map(ResumeId::from_uuid),
        cover_letter: req.cover_letter,
    };

    let application = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

/// GET /api/applications/job/{jobId}
pub async fn list_applications_for_job<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
) -> BoardResult<Json<Vec<ApplicationDetailResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListForJobUseCase::new(state.repo.clone(), state.repo.clone());

    let details = use_case.execute(JobId::from_uuid(job_id), &user).await?;

    Ok(Json(
        details
            .into_iter()
            .map(ApplicationDetailResponse::from)
            .collect(),
    ))
}

/// PATCH /api/applications/{id}/status
pub async fn set_application_status<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetStatusRequest>,
) -> BoardResult<Json<ApplicationResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let status = req
        .status
        .ok_or_else(|| BoardError::Validation("Status is required".to_string()))?;

    let use_case = SetStatusUseCase::new(state.repo.clone(), state.repo.clone());

    let application = use_case
        .execute(ApplicationId::from_uuid(id), status, &user)
        .await?;

    Ok(Json(ApplicationResponse::from(application)))
}

// ============================================================================
// Notifications
// ============================================================================

/// GET /api/notifications
pub async fn list_notifications<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
) -> BoardResult<Json<Vec<NotificationResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = NotificationsUseCase::new(state.repo.clone());
    let notes = use_case.list(&user).await?;
    Ok(Json(
        notes.into_iter().map(NotificationResponse::from).collect(),
    ))
}

/// PATCH /api/notifications/{id}/read
pub async fn mark_notification_read<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> BoardResult<Json<NotificationResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = NotificationsUseCase::new(state.repo.clone());
    let note = use_case
        .mark_read(&user, NotificationId::from_uuid(id))
        .await?;
    Ok(Json(NotificationResponse::from(note)))
}

/// POST /api/notifications
pub async fn create_notification<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateNotificationRequest>,
) -> BoardResult<impl IntoResponse>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let (user_id, title) = match (req.user_id, req.title) {
        (Some(user_id), Some(title)) if !title.is_empty() => (user_id, title),
        _ => {
            return Err(BoardError::Validation(
                "userId and title required".to_string(),
            ));
        }
    };

    let use_case = NotificationsUseCase::new(state.repo.clone());

    let note = use_case
        .create(
            &user,
            UserId::from_uuid(user_id),
            title,
            req.body,
            req.data,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(NotificationResponse::from(note))))
}

// ============================================================================
// Admin Reports
// ============================================================================

/// GET /api/admin/counts
pub async fn admin_counts<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
) -> BoardResult<Json<CountsResponse>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = reporting_use_case(&state);
    let counts = use_case.counts(&user).await?;
    Ok(Json(CountsResponse::from(counts)))
}

/// GET /api/admin/applications/status
pub async fn admin_status_breakdown<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
) -> BoardResult<Json<Vec<StatusCountResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = reporting_use_case(&state);
    let rows = use_case.status_breakdown(&user).await?;
    Ok(Json(rows.into_iter().map(StatusCountResponse::from).collect()))
}

/// GET /api/admin/applications/per-job
pub async fn admin_top_jobs<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
) -> BoardResult<Json<Vec<TopJobResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = reporting_use_case(&state);
    let rows = use_case.top_jobs_by_volume(&user, None).await?;
    Ok(Json(rows.into_iter().map(TopJobResponse::from).collect()))
}

/// GET /api/admin/applications/monthly
pub async fn admin_monthly_volume<R, U>(
    State(state): State<BoardAppState<R, U>>,
    Extension(user): Extension<AuthUser>,
) -> BoardResult<Json<Vec<MonthlyCountResponse>>>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = reporting_use_case(&state);
    let rows = use_case.monthly_volume(&user).await?;
    Ok(Json(
        rows.into_iter().map(MonthlyCountResponse::from).collect(),
    ))
}

fn reporting_use_case<R, U>(
    state: &BoardAppState<R, U>,
) -> ReportingUseCase<R, R, R, R>
where
    R: BoardRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    ReportingUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
    )
}

pub mod apply;
pub mod candidates;
pub mod employers;
pub mod jobs;
pub mod list_for_job;
pub mod notifications;
pub mod reporting;
pub mod set_status;

pub use apply::{ApplyInput, ApplyUseCase, CandidateData};
pub use candidates::CandidatesUseCase;
pub use employers::EmployersUseCase;
pub use jobs::{CreateJobInput, JobsUseCase};
pub use list_for_job::ListForJobUseCase;
pub use notifications::NotificationsUseCase;
pub use reporting::ReportingUseCase;
pub use set_status::SetStatusUseCase;

//! Application Entity
//!
//! The workflow engine's aggregate. Ownership for authorization purposes
//! is resolved transitively through the parent job's employer; the
//! application itself has no owner field.

use chrono::{DateTime, Utc};
use kernel::id::{ApplicationId, CandidateId, JobId, ResumeId};

use crate::domain::entity::{candidate::Candidate, resume::Resume};
use crate::domain::value_object::application_status::ApplicationStatus;

/// Application entity
#[derive(Debug, Clone)]
pub struct Application {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub resume_id: Option<ResumeId>,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub seen: bool,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Create a new application in the initial state.
    pub fn new(
        job_id: JobId,
        candidate_id: CandidateId,
        resume_id: Option<ResumeId>,
        cover_letter: Option<String>,
    ) -> Self {
        Self {
            application_id: ApplicationId::new(),
            job_id,
            candidate_id,
            resume_id,
            cover_letter,
            status: ApplicationStatus::default(),
            seen: false,
            applied_at: Utc::now(),
        }
    }

    /// Overwrite the status. No transition graph is enforced; callers have
    /// already passed the ownership check.
    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }
}

/// Read model: an application with its candidate and resume resolved inline,
/// as returned when listing a job's applications.
#[derive(Debug, Clone)]
pub struct ApplicationDetail {
    pub application: Application,
    pub candidate: Candidate,
    pub resume: Option<Resume>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_new_application_initial_state() {
        let app = Application::new(Id::new(), Id::new(), None, None);
        assert_eq!(app.status, ApplicationStatus::Applied);
        assert!(!app.seen);
        assert!(app.resume_id.is_none());
    }

    #[test]
    fn test_set_status_is_unconstrained() {
        let mut app = Application::new(Id::new(), Id::new(), None, None);

        app.set_status(ApplicationStatus::Offered);
        assert_eq!(app.status, ApplicationStatus::Offered);

        // No transition restriction: offered -> withdrawn -> applied all fine
        app.set_status(ApplicationStatus::Withdrawn);
        assert_eq!(app.status, ApplicationStatus::Withdrawn);

        app.set_status(ApplicationStatus::Applied);
        assert_eq!(app.status, ApplicationStatus::Applied);
    }
}

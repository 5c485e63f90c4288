//! Unit tests for the board crate

#[cfg(test)]
mod ownership_tests {
    use auth::models::Email;
    use auth::{AuthUser, Authorizer, UserRole};
    use kernel::id::{EmployerId, Id};

    fn employer_user(employer_id: EmployerId) -> AuthUser {
        AuthUser {
            user_id: Id::new(),
            role: UserRole::Employer,
            employer_id: Some(employer_id),
            email: Email::from_db("u@example.com"),
            name: None,
        }
    }

    #[test]
    fn test_foreign_employer_is_forbidden_on_owned_resource() {
        // Job owned by E1; a user affiliated with E2 must be denied, an
        // admin must pass, for every ownership-gated operation
        let owner: EmployerId = Id::new();
        let foreign = employer_user(Id::new());
        let owning = employer_user(owner);
        let admin = AuthUser {
            user_id: Id::new(),
            role: UserRole::Admin,
            employer_id: None,
            email: Email::from_db("admin@example.com"),
            name: None,
        };

        let accepted = [UserRole::Employer, UserRole::Admin];

        assert!(Authorizer::authorize(&foreign, &accepted, Some(owner)).is_err());
        assert!(Authorizer::authorize(&owning, &accepted, Some(owner)).is_ok());
        assert!(Authorizer::authorize(&admin, &accepted, Some(owner)).is_ok());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::BoardError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BoardError, StatusCode)> = vec![
            (BoardError::JobNotFound, StatusCode::NOT_FOUND),
            (BoardError::EmployerNotFound, StatusCode::NOT_FOUND),
            (BoardError::CandidateNotFound, StatusCode::NOT_FOUND),
            (BoardError::ApplicationNotFound, StatusCode::NOT_FOUND),
            (BoardError::ResumeNotFound, StatusCode::NOT_FOUND),
            (BoardError::NotificationNotFound, StatusCode::NOT_FOUND),
            (BoardError::EmployerProfileRequired, StatusCode::FORBIDDEN),
            (
                BoardError::Validation("missing".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                BoardError::Auth(auth::AuthError::Forbidden),
                StatusCode::FORBIDDEN,
            ),
            (
                BoardError::Auth(auth::AuthError::MissingCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                BoardError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entity::job::Job;
    use crate::domain::value_object::{
        application_status::ApplicationStatus, job_type::JobType,
    };
    use crate::presentation::dto::*;
    use kernel::id::Id;
    use uuid::Uuid;

    #[test]
    fn test_job_response_serialization() {
        let job = Job::new(
            Id::new(),
            "Rust Engineer".to_string(),
            None,
            None,
            Some("Berlin".to_string()),
            JobType::PartTime,
            None,
            vec!["rust".to_string()],
        );

        let json = serde_json::to_string(&JobResponse::from(job)).unwrap();
        assert!(json.contains(r#""type":"part-time""#));
        assert!(json.contains(r#""isActive":true"#));
        assert!(json.contains(r#""slug":"rust-engineer""#));
        assert!(json.contains("employerId"));
        assert!(json.contains("salaryRange"));
    }

    #[test]
    fn test_apply_request_deserialization() {
        let json = r#"{
            "jobId": "00000000-0000-0000-0000-000000000000",
            "candidateData": {"email": "a@x.com", "name": "A"},
            "coverLetter": "Hello"
        }"#;
        let request: ApplyRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.job_id, Some(Uuid::nil()));
        let candidate = request.candidate_data.unwrap();
        assert_eq!(candidate.email.as_deref(), Some("a@x.com"));
        assert_eq!(candidate.name.as_deref(), Some("A"));
        assert!(request.resume_id.is_none());
        assert_eq!(request.cover_letter.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_set_status_request_deserialization() {
        let request: SetStatusRequest = serde_json::from_str(r#"{"status":"offered"}"#).unwrap();
        assert_eq!(request.status, Some(ApplicationStatus::Offered));

        // Unknown status codes are rejected at the deserializer
        assert!(serde_json::from_str::<SetStatusRequest>(r#"{"status":"hired"}"#).is_err());
    }

    #[test]
    fn test_update_job_request_is_fully_optional() {
        let request: UpdateJobRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.is_active.is_none());

        let request: UpdateJobRequest =
            serde_json::from_str(r#"{"isActive":false,"type":"remote"}"#).unwrap();
        assert_eq!(request.is_active, Some(false));
        assert_eq!(request.job_type, Some(JobType::Remote));
    }

    #[test]
    fn test_paginated_envelope_shape() {
        let page = Paginated {
            page: 2,
            limit: 20,
            total: 41,
            items: vec!["a", "b"],
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains(r#""page":2"#));
        assert!(json.contains(r#""limit":20"#));
        assert!(json.contains(r#""total":41"#));
        assert!(json.contains(r#""items":["a","b"]"#));
    }

    #[test]
    fn test_counts_response_shape() {
        let json = serde_json::to_string(&CountsResponse {
            jobs: 0,
            applications: 0,
            candidates: 0,
            employers: 0,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"jobs":0,"applications":0,"candidates":0,"employers":0}"#
        );
    }

    #[test]
    fn test_status_count_response_uses_codes() {
        let json = serde_json::to_string(&StatusCountResponse {
            status: ApplicationStatus::Reviewing,
            count: 3,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"reviewing","count":3}"#);
    }
}

#[cfg(test)]
mod detail_dto_tests {
    use crate::domain::entity::application::{Application, ApplicationDetail};
    use crate::domain::entity::candidate::Candidate;
    use crate::presentation::dto::ApplicationDetailResponse;
    use auth::models::Email;
    use kernel::id::Id;

    #[test]
    fn test_detail_flattens_application_fields() {
        let application = Application::new(Id::new(), Id::new(), None, None);
        let candidate = Candidate::new(
            Email::from_db("a@x.com"),
            "A".to_string(),
            None,
            None,
            None,
        );

        let detail = ApplicationDetail {
            application: Application {
                candidate_id: candidate.candidate_id,
                ..application
            },
            candidate,
            resume: None,
        };

        let json = serde_json::to_value(ApplicationDetailResponse::from(detail)).unwrap();

        // Application fields sit at the top level next to the embedded
        // candidate object
        assert_eq!(json["status"], "applied");
        assert_eq!(json["seen"], false);
        assert_eq!(json["candidate"]["email"], "a@x.com");
        assert!(json["resume"].is_null());
    }
}

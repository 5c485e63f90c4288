//! Unit tests for the auth crate

#[cfg(test)]
mod token_tests {
    use crate::application::config::AuthConfig;
    use chrono::Utc;
    use platform::token::{self, TokenClaims, TokenError};
    use uuid::Uuid;

    #[test]
    fn test_issued_token_resolves_to_same_subject() {
        let config = AuthConfig::with_random_secret();
        let subject = Uuid::new_v4();
        let now_ms = Utc::now().timestamp_millis();

        let claims = TokenClaims::new(subject, "admin", now_ms + config.token_ttl_ms());
        let signed = token::sign(&claims, &config.token_secret);

        let verified = token::verify(&signed, &config.token_secret, now_ms).unwrap();
        assert_eq!(verified.sub, subject);
        assert_eq!(verified.role, "admin");
    }

    #[test]
    fn test_tampered_token_is_unauthorized() {
        let config = AuthConfig::with_random_secret();
        let now_ms = Utc::now().timestamp_millis();

        let claims = TokenClaims::new(Uuid::new_v4(), "employer", now_ms + 1000);
        let signed = token::sign(&claims, &config.token_secret);

        // Flip a character in the payload segment
        let mut chars: Vec<char> = signed.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(matches!(
            token::verify(&tampered, &config.token_secret, now_ms),
            Err(TokenError::BadSignature) | Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let config = AuthConfig::with_random_secret();
        let now_ms = Utc::now().timestamp_millis();

        let claims = TokenClaims::new(Uuid::new_v4(), "employer", now_ms - 1000);
        let signed = token::sign(&claims, &config.token_secret);

        assert_eq!(
            token::verify(&signed, &config.token_secret, now_ms),
            Err(TokenError::Expired)
        );
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::Forbidden, StatusCode::FORBIDDEN),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (
                AuthError::Validation("missing".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Internal("test".into()),
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

    #[test]
    fn test_unknown_email_and_bad_password_are_indistinguishable() {
        // Same variant, same message, same status for both failure paths
        let unknown = AuthError::InvalidCredentials;
        let mismatch = AuthError::InvalidCredentials;
        assert_eq!(unknown.to_string(), mismatch.to_string());
        assert_eq!(unknown.status_code(), mismatch.status_code());
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::value_object::user_role::UserRole;
    use crate::presentation::dto::*;
    use uuid::Uuid;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"email":"a@x.com","password":"Secret#Word9","role":"admin"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email.as_deref(), Some("a@x.com"));
        assert_eq!(request.role.as_deref(), Some("admin"));
        assert!(request.name.is_none());
        assert!(request.employer_id.is_none());
    }

    #[test]
    fn test_register_request_accepts_missing_fields() {
        // Presence is validated by the handler, not the deserializer
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            token: "abc.def".to_string(),
            user: UserSummary {
                id: Uuid::nil(),
                email: "a@x.com".to_string(),
                role: UserRole::Employer,
                name: Some("A".to_string()),
                employer_id: Some(Uuid::nil()),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""token":"abc.def""#));
        assert!(json.contains(r#""role":"employer""#));
        assert!(json.contains("employerId"));
    }

    #[test]
    fn test_register_response_serialization() {
        let response = RegisterResponse {
            id: Uuid::nil(),
            email: "a@x.com".to_string(),
            role: UserRole::Admin,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""role":"admin""#));
        assert!(json.contains(r#""email":"a@x.com""#));
    }
}

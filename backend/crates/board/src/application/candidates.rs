//! Candidate Registry Use Cases
//!
//! Public upsert-by-email with partial-field overwrite; reads are limited
//! to employer and admin roles.

use std::sync::Arc;

use auth::models::Email;
use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::CandidateId;

use crate::domain::entity::candidate::Candidate;
use crate::domain::repository::CandidateRepository;
use crate::error::{BoardError, BoardResult};

/// Upsert input
pub struct UpsertCandidateInput {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
}

/// Candidate registry use cases
pub struct CandidatesUseCase<C>
where
    C: CandidateRepository,
{
    candidate_repo: Arc<C>,
}

impl<C> CandidatesUseCase<C>
where
    C: CandidateRepository,
{
    pub fn new(candidate_repo: Arc<C>) -> Self {
        Self { candidate_repo }
    }

    /// Create-if-absent-else-merge by unique email. Returns the record and
    /// whether it was newly created.
    pub async fn upsert(&self, input: UpsertCandidateInput) -> BoardResult<(Candidate, bool)> {
        let email = Email::new(input.email)
            .map_err(|e| BoardError::Validation(e.message().to_string()))?;

        if input.name.is_empty() {
            return Err(BoardError::Validation(
                "Name and email required".to_string(),
            ));
        }

        match self.candidate_repo.find_by_email(&email).await? {
            Some(mut existing) => {
                existing.merge_profile(input.name, input.phone, input.location, input.profile);
                self.candidate_repo.update(&existing).await?;
                Ok((existing, false))
            }
            None => {
                let candidate = Candidate::new(
                    email,
                    input.name,
                    input.phone,
                    input.location,
                    input.profile,
                );
                self.candidate_repo.create(&candidate).await?;
                Ok((candidate, true))
            }
        }
    }

    /// Employer/admin listing with optional free-text filter.
    pub async fn list(&self, acting: &AuthUser, text: Option<&str>) -> BoardResult<Vec<Candidate>> {
        Authorizer::require_role(acting, &[UserRole::Employer, UserRole::Admin])?;
        self.candidate_repo.search(text).await
    }

    /// Employer/admin detail read.
    pub async fn get(&self, acting: &AuthUser, candidate_id: CandidateId) -> BoardResult<Candidate> {
        Authorizer::require_role(acting, &[UserRole::Employer, UserRole::Admin])?;
        self.candidate_repo
            .find_by_id(&candidate_id)
            .await?
            .ok_or(BoardError::CandidateNotFound)
    }
}

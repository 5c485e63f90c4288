//! Employer Registry Use Cases
//!
//! Public reads; every mutation is admin-only.

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::EmployerId;

use crate::domain::entity::employer::{Employer, EmployerPatch};
use crate::domain::repository::EmployerRepository;
use crate::error::{BoardError, BoardResult};

/// Employer registry use cases
pub struct EmployersUseCase<E>
where
    E: EmployerRepository,
{
    employer_repo: Arc<E>,
}

impl<E> EmployersUseCase<E>
where
    E: EmployerRepository,
{
    pub fn new(employer_repo: Arc<E>) -> Self {
        Self { employer_repo }
    }

    /// Public listing, newest first.
    pub async fn list(&self) -> BoardResult<Vec<Employer>> {
        self.employer_repo.list().await
    }

    /// Public detail read.
    pub async fn get(&self, employer_id: EmployerId) -> BoardResult<Employer> {
        self.employer_repo
            .find_by_id(&employer_id)
            .await?
            .ok_or(BoardError::EmployerNotFound)
    }

    pub async fn create(
        &self,
        acting: &AuthUser,
        name: String,
        website: Option<String>,
        description: Option<String>,
        contact_email: Option<String>,
    ) -> BoardResult<Employer> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;

        if name.is_empty() {
            return Err(BoardError::Validation("Name is required".to_string()));
        }

        let employer = Employer::new(name, website, description, contact_email);
        self.employer_repo.create(&employer).await?;

        tracing::info!(employer_id = %employer.employer_id, "Employer created");

        Ok(employer)
    }

    pub async fn update(
        &self,
        acting: &AuthUser,
        employer_id: EmployerId,
        patch: EmployerPatch,
    ) -> BoardResult<Employer> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;

        let mut employer = self
            .employer_repo
            .find_by_id(&employer_id)
            .await?
            .ok_or(BoardError::EmployerNotFound)?;

        employer.apply_patch(patch);
        self.employer_repo.update(&employer).await?;

        Ok(employer)
    }

    pub async fn delete(&self, acting: &AuthUser, employer_id: EmployerId) -> BoardResult<()> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;

        let employer = self
            .employer_repo
            .find_by_id(&employer_id)
            .await?
            .ok_or(BoardError::EmployerNotFound)?;

        self.employer_repo.delete(&employer.employer_id).await?;

        tracing::info!(employer_id = %employer.employer_id, "Employer deleted");

        Ok(())
    }
}

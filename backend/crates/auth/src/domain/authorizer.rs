//! Authorizer
//!
//! The single place permission decisions are made. Callers hand it a
//! resolved identity, the operation's accepted role set, and (for
//! ownership-gated writes) the owning employer of the target resource.
//! Decisions are pure; callers abort before any mutation on a denial.

use kernel::id::{EmployerId, UserId};

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Resolved identity attached to a request after token verification.
///
/// This is a read-model snapshot of the subject, detached from storage;
/// handlers never see the `User` entity or its password hash.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: UserRole,
    pub employer_id: Option<EmployerId>,
    pub email: Email,
    pub name: Option<String>,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            role: user.role,
            employer_id: user.employer_id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Centralized permission checks.
pub struct Authorizer;

impl Authorizer {
    /// Deny unless the subject's role is in the operation's accepted set.
    ///
    /// Admin is NOT implicit here; call sites that accept admin list it.
    pub fn require_role(user: &AuthUser, accepted: &[UserRole]) -> AuthResult<()> {
        if accepted.contains(&user.role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    /// Deny unless the subject is an admin or is affiliated with the
    /// resource's owning employer.
    pub fn require_owner(user: &AuthUser, owner: EmployerId) -> AuthResult<()> {
        if user.role.is_admin() {
            return Ok(());
        }
        match user.employer_id {
            Some(affiliation) if affiliation == owner => Ok(()),
            _ => Err(AuthError::Forbidden),
        }
    }

    /// Combined check: role first, then ownership when an owner is given.
    pub fn authorize(
        user: &AuthUser,
        accepted: &[UserRole],
        owner: Option<EmployerId>,
    ) -> AuthResult<()> {
        Self::require_role(user, accepted)?;
        if let Some(owner) = owner {
            Self::require_owner(user, owner)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn employer_user(employer_id: Option<EmployerId>) -> AuthUser {
        AuthUser {
            user_id: Id::new(),
            role: UserRole::Employer,
            employer_id,
            email: Email::from_db("e@example.com"),
            name: None,
        }
    }

    fn admin_user() -> AuthUser {
        AuthUser {
            user_id: Id::new(),
            role: UserRole::Admin,
            employer_id: None,
            email: Email::from_db("a@example.com"),
            name: None,
        }
    }

    #[test]
    fn test_require_role_accepts_listed_roles() {
        let user = employer_user(None);
        assert!(Authorizer::require_role(&user, &[UserRole::Employer]).is_ok());
        assert!(
            Authorizer::require_role(&user, &[UserRole::Employer, UserRole::Admin]).is_ok()
        );
    }

    #[test]
    fn test_require_role_denies_unlisted_roles() {
        let user = employer_user(None);
        assert!(matches!(
            Authorizer::require_role(&user, &[UserRole::Admin]),
            Err(AuthError::Forbidden)
        ));

        // Admin is not implicitly accepted where only employer is listed
        let admin = admin_user();
        assert!(matches!(
            Authorizer::require_role(&admin, &[UserRole::Employer]),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_require_owner_matching_affiliation() {
        let owner: EmployerId = Id::new();
        let user = employer_user(Some(owner));
        assert!(Authorizer::require_owner(&user, owner).is_ok());
    }

    #[test]
    fn test_require_owner_denies_other_employer() {
        let owner: EmployerId = Id::new();
        let other: EmployerId = Id::new();
        let user = employer_user(Some(other));
        assert!(matches!(
            Authorizer::require_owner(&user, owner),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_require_owner_denies_unaffiliated() {
        let owner: EmployerId = Id::new();
        let user = employer_user(None);
        assert!(matches!(
            Authorizer::require_owner(&user, owner),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_require_owner_admin_bypass() {
        let owner: EmployerId = Id::new();
        assert!(Authorizer::require_owner(&admin_user(), owner).is_ok());
    }

    #[test]
    fn test_authorize_role_then_ownership() {
        let owner: EmployerId = Id::new();
        let accepted = [UserRole::Employer, UserRole::Admin];

        let owning = employer_user(Some(owner));
        assert!(Authorizer::authorize(&owning, &accepted, Some(owner)).is_ok());

        let foreign = employer_user(Some(Id::new()));
        assert!(Authorizer::authorize(&foreign, &accepted, Some(owner)).is_err());

        // Admin passes both the role set and the ownership bypass
        assert!(Authorizer::authorize(&admin_user(), &accepted, Some(owner)).is_ok());

        // No owner supplied: role check alone decides
        assert!(Authorizer::authorize(&foreign, &accepted, None).is_ok());
    }
}

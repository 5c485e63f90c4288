//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type JobId = Id<markers::Job>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;

    /// Marker for Employer IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Employer;

    /// Marker for Job IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Job;

    /// Marker for Candidate IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Candidate;

    /// Marker for Resume IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Resume;

    /// Marker for Application IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Application;

    /// Marker for Notification IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Notification;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type EmployerId = Id<markers::Employer>;
pub type JobId = Id<markers::Job>;
pub type CandidateId = Id<markers::Candidate>;
pub type ResumeId = Id<markers::Resume>;
pub type ApplicationId = Id<markers::Application>;
pub type NotificationId = Id<markers::Notification>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let job_id: JobId = Id::new();
        let application_id: ApplicationId = Id::new();

        // These are different types, cannot be mixed
        let _j: Uuid = job_id.into_uuid();
        let _a: Uuid = application_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: JobId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_roundtrip_display() {
        let id: EmployerId = Id::new();
        let parsed: Uuid = id.to_string().parse().unwrap();
        assert_eq!(parsed, id.into_uuid());
    }
}

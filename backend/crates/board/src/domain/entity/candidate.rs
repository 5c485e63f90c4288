//! Candidate Entity

use auth::models::Email;
use chrono::{DateTime, Utc};
use kernel::id::CandidateId;

/// Candidate entity
///
/// Not tied to a login; keyed by unique email for upsert. Created either
/// through the public profile endpoint or implicitly when applying.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub candidate_id: CandidateId,
    /// Unique upsert key, lowercase by construction
    pub email: Email,
    pub name: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    pub fn new(
        email: Email,
        name: String,
        phone: Option<String>,
        location: Option<String>,
        profile: Option<String>,
    ) -> Self {
        Self {
            candidate_id: CandidateId::new(),
            email,
            name,
            phone,
            location,
            profile,
            created_at: Utc::now(),
        }
    }

    /// Merge an incoming profile into this record.
    ///
    /// Name always replaces; the remaining fields replace only when the
    /// incoming value is non-empty. Email never changes (it is the key).
    pub fn merge_profile(
        &mut self,
        name: String,
        phone: Option<String>,
        location: Option<String>,
        profile: Option<String>,
    ) {
        self.name = name;
        if let Some(phone) = non_empty(phone) {
            self.phone = Some(phone);
        }
        if let Some(location) = non_empty(location) {
            self.location = Some(location);
        }
        if let Some(profile) = non_empty(profile) {
            self.profile = Some(profile);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate::new(
            Email::from_db("a@x.com"),
            "Ada".to_string(),
            Some("555-0100".to_string()),
            Some("Berlin".to_string()),
            None,
        )
    }

    #[test]
    fn test_merge_replaces_name_and_non_empty_fields() {
        let mut c = candidate();
        c.merge_profile(
            "Ada L.".to_string(),
            None,
            Some("Munich".to_string()),
            Some("Engineer".to_string()),
        );

        assert_eq!(c.name, "Ada L.");
        assert_eq!(c.phone.as_deref(), Some("555-0100")); // untouched
        assert_eq!(c.location.as_deref(), Some("Munich"));
        assert_eq!(c.profile.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_merge_ignores_empty_strings() {
        let mut c = candidate();
        c.merge_profile("Ada".to_string(), Some("".to_string()), None, None);
        assert_eq!(c.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_merge_keeps_email_and_id() {
        let mut c = candidate();
        let id = c.candidate_id;
        c.merge_profile("Ada".to_string(), None, None, None);
        assert_eq!(c.candidate_id, id);
        assert_eq!(c.email.as_str(), "a@x.com");
    }
}

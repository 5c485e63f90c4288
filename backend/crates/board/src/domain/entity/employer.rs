//! Employer Entity

use chrono::{DateTime, Utc};
use kernel::id::EmployerId;

/// Employer entity
///
/// Created by admins; jobs and (transitively) applications are owned by it.
#[derive(Debug, Clone)]
pub struct Employer {
    pub employer_id: EmployerId,
    pub name: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Employer {
    pub fn new(
        name: String,
        website: Option<String>,
        description: Option<String>,
        contact_email: Option<String>,
    ) -> Self {
        Self {
            employer_id: EmployerId::new(),
            name,
            website,
            description,
            contact_email,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update; only provided fields replace existing values.
    pub fn apply_patch(&mut self, patch: EmployerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(website) = patch.website {
            self.website = Some(website);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(contact_email) = patch.contact_email {
            self.contact_email = Some(contact_email);
        }
    }
}

/// Partial employer update
#[derive(Debug, Clone, Default)]
pub struct EmployerPatch {
    pub name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_patch_replaces_only_provided_fields() {
        let mut employer = Employer::new(
            "Acme".to_string(),
            Some("https://acme.test".to_string()),
            None,
            None,
        );

        employer.apply_patch(EmployerPatch {
            description: Some("Widgets".to_string()),
            ..Default::default()
        });

        assert_eq!(employer.name, "Acme");
        assert_eq!(employer.website.as_deref(), Some("https://acme.test"));
        assert_eq!(employer.description.as_deref(), Some("Widgets"));
    }
}

//! Job Entity

use chrono::{DateTime, Utc};
use kernel::id::{EmployerId, JobId};

use crate::domain::value_object::job_type::JobType;

/// Job posting entity
///
/// `employer_id` is forced to the creating user's affiliation and never
/// taken from the client.
#[derive(Debug, Clone)]
pub struct Job {
    pub job_id: JobId,
    pub employer_id: EmployerId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: JobType,
    pub salary_range: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Job {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employer_id: EmployerId,
        title: String,
        slug: Option<String>,
        description: Option<String>,
        location: Option<String>,
        job_type: JobType,
        salary_range: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        let slug = slug.unwrap_or_else(|| slugify(&title));
        Self {
            job_id: JobId::new(),
            employer_id,
            title,
            slug,
            description,
            location,
            job_type,
            salary_range,
            tags,
            is_active: true,
            created_at: Utc::now(),
            closed_at: None,
        }
    }

    /// Apply a partial update; only provided fields replace existing values.
    /// Ownership never changes through a patch.
    pub fn apply_patch(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(job_type) = patch.job_type {
            self.job_type = job_type;
        }
        if let Some(salary_range) = patch.salary_range {
            self.salary_range = Some(salary_range);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(closed_at) = patch.closed_at {
            self.closed_at = Some(closed_at);
        }
    }
}

/// Partial job update
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary_range: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Derive a URL-safe slug from a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true; // suppress leading dash
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Senior Rust Engineer"), "senior-rust-engineer");
        assert_eq!(slugify("C++ / Systems (Remote)"), "c-systems-remote");
        assert_eq!(slugify("  spaces  "), "spaces");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_new_job_defaults() {
        let job = Job::new(
            Id::new(),
            "Backend Engineer".to_string(),
            None,
            None,
            None,
            JobType::default(),
            None,
            vec![],
        );

        assert!(job.is_active);
        assert!(job.closed_at.is_none());
        assert_eq!(job.slug, "backend-engineer");
    }

    #[test]
    fn test_new_job_keeps_supplied_slug() {
        let job = Job::new(
            Id::new(),
            "Backend Engineer".to_string(),
            Some("be-2024".to_string()),
            None,
            None,
            JobType::Contract,
            None,
            vec![],
        );
        assert_eq!(job.slug, "be-2024");
    }

    #[test]
    fn test_apply_patch_partial() {
        let mut job = Job::new(
            Id::new(),
            "Backend Engineer".to_string(),
            None,
            Some("old".to_string()),
            None,
            JobType::FullTime,
            None,
            vec!["rust".to_string()],
        );
        let employer_id = job.employer_id;

        job.apply_patch(JobPatch {
            is_active: Some(false),
            tags: Some(vec!["rust".to_string(), "backend".to_string()]),
            ..Default::default()
        });

        assert!(!job.is_active);
        assert_eq!(job.tags.len(), 2);
        assert_eq!(job.description.as_deref(), Some("old"));
        assert_eq!(job.employer_id, employer_id);
    }
}

//! Resume Entity

use chrono::{DateTime, Utc};
use kernel::id::{CandidateId, ResumeId};

/// Resume entity
///
/// Referenced from applications and resolved inline when listing them;
/// file storage itself lives elsewhere.
#[derive(Debug, Clone)]
pub struct Resume {
    pub resume_id: ResumeId,
    pub candidate_id: CandidateId,
    /// Storage path or object key
    pub filename: Option<String>,
    /// Optional parsed text content
    pub content: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

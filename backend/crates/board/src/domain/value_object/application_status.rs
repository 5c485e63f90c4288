use serde::{Deserialize, Serialize};
use std::fmt;

/// Application lifecycle status.
///
/// Flat set, no enforced transition graph: any status is directly settable
/// by an authorized actor, including moves like rejected back to applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum ApplicationStatus {
    #[default]
    Applied = 0,
    Reviewing = 1,
    Interview = 2,
    Offered = 3,
    Rejected = 4,
    Withdrawn = 5,
}

impl ApplicationStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use ApplicationStatus::*;
        match self {
            Applied => "applied",
            Reviewing => "reviewing",
            Interview => "interview",
            Offered => "offered",
            Rejected => "rejected",
            Withdrawn => "withdrawn",
        }
    }

    /// Decode a status id from storage. Only trusted values reach this point.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        use ApplicationStatus::*;
        match id {
            0 => Applied,
            1 => Reviewing,
            2 => Interview,
            3 => Offered,
            4 => Rejected,
            5 => Withdrawn,
            _ => {
                tracing::error!("Invalid ApplicationStatus id: {}", id);
                unreachable!("Invalid ApplicationStatus id: {}", id)
            }
        }
    }

    /// Parse a status code from untrusted input.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use ApplicationStatus::*;
        match code {
            "applied" => Some(Applied),
            "reviewing" => Some(Reviewing),
            "interview" => Some(Interview),
            "offered" => Some(Offered),
            "rejected" => Some(Rejected),
            "withdrawn" => Some(Withdrawn),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_id_roundtrip() {
        for status in [
            ApplicationStatus::Applied,
            ApplicationStatus::Reviewing,
            ApplicationStatus::Interview,
            ApplicationStatus::Offered,
            ApplicationStatus::Rejected,
            ApplicationStatus::Withdrawn,
        ] {
            assert_eq!(ApplicationStatus::from_id(status.id()), status);
            assert_eq!(ApplicationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_status_default_is_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }

    #[test]
    fn test_status_from_code_rejects_unknown() {
        assert_eq!(ApplicationStatus::from_code("hired"), None);
        assert_eq!(ApplicationStatus::from_code("Applied"), None);
        assert_eq!(ApplicationStatus::from_code(""), None);
    }

    #[test]
    fn test_status_serde_codes() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Offered).unwrap(),
            r#""offered""#
        );
        let parsed: ApplicationStatus = serde_json::from_str(r#""withdrawn""#).unwrap();
        assert_eq!(parsed, ApplicationStatus::Withdrawn);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(i16)]
pub enum JobType {
    #[default]
    FullTime = 0,
    PartTime = 1,
    Contract = 2,
    Remote = 3,
}

impl JobType {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use JobType::*;
        match self {
            FullTime => "full-time",
            PartTime => "part-time",
            Contract => "contract",
            Remote => "remote",
        }
    }

    /// Decode a type id from storage. Only trusted values reach this point.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        use JobType::*;
        match id {
            0 => FullTime,
            1 => PartTime,
            2 => Contract,
            3 => Remote,
            _ => {
                tracing::error!("Invalid JobType id: {}", id);
                unreachable!("Invalid JobType id: {}", id)
            }
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serde_codes() {
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            r#""full-time""#
        );
        assert_eq!(
            serde_json::to_string(&JobType::PartTime).unwrap(),
            r#""part-time""#
        );
        let parsed: JobType = serde_json::from_str(r#""remote""#).unwrap();
        assert_eq!(parsed, JobType::Remote);
    }

    #[test]
    fn test_job_type_id_roundtrip() {
        for job_type in [
            JobType::FullTime,
            JobType::PartTime,
            JobType::Contract,
            JobType::Remote,
        ] {
            assert_eq!(JobType::from_id(job_type.id()), job_type);
        }
    }

    #[test]
    fn test_job_type_default() {
        assert_eq!(JobType::default(), JobType::FullTime);
    }
}

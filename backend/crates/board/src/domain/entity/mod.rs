pub mod application;
pub mod candidate;
pub mod employer;
pub mod job;
pub mod notification;
pub mod resume;

pub use application::{Application, ApplicationDetail};
pub use candidate::Candidate;
pub use employer::Employer;
pub use job::Job;
pub use notification::Notification;
pub use resume::Resume;

pub mod guest;
pub mod submission;

pub use guest::{AttendanceChoice, GuestEntry};
pub use submission::{SubmissionRequest, ValidatedRsvp};

// rsvp-backend/src/features/rsvp/mod.rs

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use error::SubmissionError;
pub use handlers::rsvp_router;
pub use services::RsvpService;

// rsvp-backend/src/features/mod.rs

pub mod rsvp;
pub mod system;

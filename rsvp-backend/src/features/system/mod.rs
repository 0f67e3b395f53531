// rsvp-backend/src/features/system/mod.rs

pub mod dto;
pub mod handlers;

pub use handlers::system_router;

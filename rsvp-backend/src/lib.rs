// src/lib.rs
pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod infrastructure;
pub mod logging;
pub mod middleware;

// Re-export commonly used types
pub use api::{app_router, AppState};
pub use error::{AppError, AppResult};

pub mod rsvp;
pub mod template;

pub use rsvp::RsvpService;
pub use template::{escape_html, RsvpNotification};

//! Domain layer: the color sequence and the session protocol, free of HTTP
//! and storage concerns.

pub mod color_sequence;
pub mod params;
pub mod session;
pub mod session_id;

// Re-exports for ergonomics
pub use color_sequence::{color_for, Rgb};
pub use session::{GuessOutcome, PollOutcome, Session, SessionState};
pub use session_id::SessionId;

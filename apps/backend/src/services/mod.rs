pub mod session_coordinator;
pub mod session_store;

pub use session_coordinator::{GuessReport, GuessResolution, PollReport, SessionCoordinator};
pub use session_store::{SessionHandle, SessionStore};

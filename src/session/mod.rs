//! Session state: stored records, the section being shown and the edit and
//! view cursors.
//!
//! Each user session owns one [`SessionState`]. The HTTP layer keeps them
//! keyed by session id; nothing is shared between sessions.

mod state;
mod store;

pub use state::{Interaction, Outcome, Section, SessionSnapshot, SessionState};
pub use store::RecordStore;

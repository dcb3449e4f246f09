//! Session module - server-side stash for the form-to-editor handoff.
//!
//! The wizard stores its working state under a caller-chosen session id;
//! the editor picks it up from the same id. State is keyed, not inspected.

pub mod handlers;
pub mod store;

pub use store::{session_key, InMemorySessionStore, SessionStore, DRAFT_KEY, FORM_DATA_KEY};

//! Actor system for chat sessions.
//!
//! - `assistant`: produces replies (classification plus a typing delay)
//! - `session`: owns one transcript and serializes user turns
//! - `messages`: channel message types and actor errors
//! - `traits`: the `Assistant` seam used by sessions

pub mod assistant;
pub mod messages;
pub mod session;
pub mod traits;

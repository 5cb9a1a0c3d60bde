use serde::Serialize;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::brain::IntentResult;
use crate::models::{ConversationTurn, Transcript};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor's channel is closed, usually because it was shut down.
    #[error("Actor channel closed: {0}")]
    Closed(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the `AssistantActor`.
#[derive(Debug)]
pub enum AssistantMessage {
    /// A request to reply to one utterance.
    Reply {
        utterance: String,
        /// A channel to send the classification back once the typing delay elapsed.
        responder: oneshot::Sender<Result<IntentResult, AppError>>,
    },
}

/// Messages that can be sent to the `SessionActor`.
#[derive(Debug)]
pub enum SessionMessage {
    /// A request to process a user's message.
    Send {
        content: String,
        /// Point after which the caller no longer wants the reply.
        deadline: Instant,
        /// A channel to send the completed turn back.
        responder: oneshot::Sender<Result<ConversationTurn, AppError>>,
    },
    /// A request for a snapshot of the transcript.
    Transcript {
        responder: oneshot::Sender<Transcript>,
    },
    /// A request for the suggestion chips currently on offer.
    Suggestions {
        responder: oneshot::Sender<Vec<&'static str>>,
    },
    /// A command to stop the session actor.
    Shutdown,
}

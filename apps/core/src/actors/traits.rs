use crate::actors::messages::AppError;
use crate::brain::IntentResult;
use async_trait::async_trait;

/// Defines the public interface for an assistant that answers user utterances.
///
/// Sessions depend on this trait rather than a concrete actor so tests can
/// substitute a scripted assistant.
#[async_trait]
pub trait Assistant: Send + Sync + 'static {
    /// Produces the reply for one utterance.
    async fn reply(&self, utterance: String) -> Result<IntentResult, AppError>;
}

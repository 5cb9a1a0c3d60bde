use crate::actors::messages::{AppError, AssistantMessage};
use crate::actors::traits::Assistant;
use crate::brain::{IntentClassifier, IntentResult};
use crate::config::TypingDelay;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument};

/// A handle to the `AssistantActor`.
///
/// This struct provides a public, cloneable interface for sending messages to the
/// running assistant actor. It abstracts away the `mpsc::Sender`.
#[derive(Clone)]
pub struct AssistantActorHandle {
    sender: mpsc::Sender<AssistantMessage>,
}

impl AssistantActorHandle {
    /// Creates a new `AssistantActor` and returns a handle to it.
    ///
    /// This will spawn the `AssistantActorRunner` in a new Tokio task.
    ///
    /// # Arguments
    ///
    /// * `classifier` - The rule table used to pick replies.
    /// * `delay` - The simulated typing delay applied before each reply.
    pub fn new(classifier: IntentClassifier, delay: TypingDelay) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = AssistantActorRunner::new(receiver, classifier, delay);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }
}

#[async_trait]
impl Assistant for AssistantActorHandle {
    async fn reply(&self, utterance: String) -> Result<IntentResult, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = AssistantMessage::Reply {
            utterance,
            responder: send,
        };

        self.sender.send(msg).await?;
        timeout(REPLY_TIMEOUT, recv).await??
    }
}

// --- Constants ---
const REPLY_TIMEOUT: Duration = Duration::from_secs(30);

// --- Actor Runner (Internal Logic) ---
struct AssistantActorRunner {
    receiver: mpsc::Receiver<AssistantMessage>,
    classifier: IntentClassifier,
    delay: TypingDelay,
}

impl AssistantActorRunner {
    fn new(
        receiver: mpsc::Receiver<AssistantMessage>,
        classifier: IntentClassifier,
        delay: TypingDelay,
    ) -> Self {
        Self {
            receiver,
            classifier,
            delay,
        }
    }

    async fn run(mut self) {
        info!("AssistantActor started");
        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }
        info!("AssistantActor stopped");
    }

    async fn handle_message(&mut self, msg: AssistantMessage) {
        match msg {
            AssistantMessage::Reply {
                utterance,
                responder,
            } => {
                let result = self.handle_reply(&utterance).await;
                let _ = responder.send(Ok(result));
            }
        }
    }

    #[instrument(skip(self))]
    async fn handle_reply(&self, utterance: &str) -> IntentResult {
        let result = self.classifier.classify(utterance);
        debug!(
            category = %result.category,
            keyword = result.matched_keyword.unwrap_or("-"),
            "Utterance classified"
        );

        // Cosmetic "thinking" pause before the reply surfaces
        if !self.delay.is_none() {
            sleep(self.delay.sample()).await;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Category;
    use std::time::Instant;

    #[tokio::test]
    async fn test_reply_without_delay() {
        let handle = AssistantActorHandle::new(IntentClassifier::new(), TypingDelay::none());

        let result = handle.reply("Any cab to Delhi?".to_string()).await.unwrap();
        assert_eq!(result.category, Category::Cabpool);
    }

    #[tokio::test]
    async fn test_reply_waits_for_typing_delay() {
        let config = crate::config::ChatConfig {
            typing_delay_min_ms: 30,
            typing_delay_max_ms: 40,
            ..Default::default()
        };
        let handle = AssistantActorHandle::new(IntentClassifier::new(), config.typing_delay());

        let start = Instant::now();
        let result = handle.reply("hello".to_string()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
        assert_eq!(result.category, Category::Greeting);
    }
}

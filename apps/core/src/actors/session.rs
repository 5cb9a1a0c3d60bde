use crate::actors::assistant::AssistantActorHandle;
use crate::actors::messages::{AppError, SessionMessage};
use crate::actors::traits::Assistant;
use crate::brain::{IntentClassifier, IntentResult, SUGGESTION_CHIPS};
use crate::config::ChatConfig;
use crate::models::{ConversationTurn, Message, Transcript};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{timeout, timeout_at, Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Time a caller of `send` waits for its turn, measured from enqueue.
const REPLY_TIMEOUT: Duration = Duration::from_secs(30);
const SNAPSHOT_TIMEOUT: Duration = Duration::from_secs(5);

/// A handle to the `SessionActor`.
///
/// This is the primary entry point for chat logic. One session owns one
/// transcript; every turn goes through its channel, so turns are handled one
/// at a time in arrival order.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Creates a new session backed by the default rule-based assistant.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated chat configuration (typing delay window).
    pub fn new(config: &ChatConfig) -> Self {
        let assistant = AssistantActorHandle::new(IntentClassifier::new(), config.typing_delay());
        Self::with_assistant(Arc::new(assistant))
    }

    /// Creates a new session that asks the given assistant for replies.
    pub fn with_assistant<A: Assistant>(assistant: Arc<A>) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = SessionRunner::new(receiver, assistant);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }

    /// Submits one user message and waits for the completed turn.
    ///
    /// Blank input (after trimming) is rejected and leaves the transcript
    /// untouched. A turn not finished within 30 s of enqueue fails with
    /// `AppError::Timeout` and is not recorded.
    #[instrument(skip(self))]
    pub async fn send(&self, content: String) -> Result<ConversationTurn, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SessionMessage::Send {
            content,
            deadline: Instant::now() + REPLY_TIMEOUT,
            responder: send,
        };
        self.sender.send(msg).await?;
        // The runner enforces the deadline and always answers.
        recv.await?
    }

    /// Returns a snapshot of the transcript.
    ///
    /// Answered right away, even while a reply is being typed.
    pub async fn transcript(&self) -> Result<Transcript, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Transcript { responder: send })
            .await?;
        Ok(timeout(SNAPSHOT_TIMEOUT, recv).await??)
    }

    /// Suggestion chips on offer; empty once a turn has been recorded.
    pub async fn suggestions(&self) -> Result<Vec<&'static str>, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Suggestions { responder: send })
            .await?;
        Ok(timeout(SNAPSHOT_TIMEOUT, recv).await??)
    }

    /// Stops the session actor. Later calls on any clone fail with a closed-channel error.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender.send(SessionMessage::Shutdown).await?;
        Ok(())
    }
}

type TurnResponder = oneshot::Sender<Result<ConversationTurn, AppError>>;

/// A message waiting for the assistant to become free.
struct QueuedTurn {
    text: String,
    deadline: Instant,
    responder: TurnResponder,
}

/// The turn whose reply is being produced.
struct PendingTurn {
    utterance: Message,
    responder: TurnResponder,
    reply: JoinHandle<Result<IntentResult, AppError>>,
}

// --- Actor Runner ---
struct SessionRunner<A>
where
    A: Assistant + Send + Sync + 'static,
{
    receiver: mpsc::Receiver<SessionMessage>,
    assistant: Arc<A>,
    transcript: Transcript,
    backlog: VecDeque<QueuedTurn>,
    pending: Option<PendingTurn>,
}

impl<A> SessionRunner<A>
where
    A: Assistant + Send + Sync + 'static,
{
    fn new(receiver: mpsc::Receiver<SessionMessage>, assistant: Arc<A>) -> Self {
        Self {
            receiver,
            assistant,
            transcript: Transcript::new(),
            backlog: VecDeque::new(),
            pending: None,
        }
    }

    async fn run(mut self) {
        info!("Session started");
        loop {
            tokio::select! {
                outcome = wait_reply(&mut self.pending), if self.pending.is_some() => {
                    self.finish_turn(outcome);
                }
                msg = self.receiver.recv() => match msg {
                    Some(SessionMessage::Shutdown) | None => {
                        info!("Session shutting down...");
                        break;
                    }
                    Some(msg) => self.handle_message(msg),
                },
            }
        }
        if let Some(pending) = self.pending.take() {
            pending.reply.abort();
        }
        info!(turns = self.transcript.len(), "Session stopped");
    }

    fn handle_message(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::Send {
                content,
                deadline,
                responder,
            } => {
                let text = content.trim();
                if text.is_empty() {
                    warn!("Rejected blank message");
                    let _ = responder.send(Err(AppError::Validation("message is empty".to_string())));
                    return;
                }
                self.backlog.push_back(QueuedTurn {
                    text: text.to_string(),
                    deadline,
                    responder,
                });
                self.start_next_turn();
            }
            SessionMessage::Transcript { responder } => {
                let _ = responder.send(self.transcript.clone());
            }
            SessionMessage::Suggestions { responder } => {
                let chips = if self.transcript.is_empty() {
                    SUGGESTION_CHIPS.to_vec()
                } else {
                    Vec::new()
                };
                let _ = responder.send(chips);
            }
            SessionMessage::Shutdown => {}
        }
    }

    /// Hands the oldest live queued message to the assistant, if it is idle.
    fn start_next_turn(&mut self) {
        if self.pending.is_some() {
            return;
        }

        while let Some(queued) = self.backlog.pop_front() {
            if queued.responder.is_closed() {
                debug!("Caller went away, dropping queued message");
                continue;
            }
            if Instant::now() >= queued.deadline {
                warn!("Message expired while queued");
                let _ = queued.responder.send(Err(AppError::Timeout(
                    "no reply before the deadline".to_string(),
                )));
                continue;
            }

            let assistant = Arc::clone(&self.assistant);
            let deadline = queued.deadline;
            let text = queued.text.clone();
            let reply = tokio::spawn(async move {
                match timeout_at(deadline, assistant.reply(text)).await {
                    Ok(result) => result,
                    Err(elapsed) => Err(AppError::from(elapsed)),
                }
            });

            self.pending = Some(PendingTurn {
                utterance: Message::user(queued.text),
                responder: queued.responder,
                reply,
            });
            return;
        }
    }

    /// Records the turn only if its caller is still there to receive it.
    #[instrument(skip_all)]
    fn finish_turn(&mut self, outcome: Result<IntentResult, AppError>) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match outcome {
            Ok(result) => {
                info!(category = %result.category, "Reply selected");
                let turn = ConversationTurn {
                    utterance: pending.utterance,
                    category: result.category,
                    reply: Message::assistant(result.response),
                };
                if pending.responder.send(Ok(turn.clone())).is_ok() {
                    self.transcript.push(turn);
                } else {
                    warn!("Caller went away before the reply, turn not recorded");
                }
            }
            Err(e) => {
                error!("Error processing user message: {}", e);
                let _ = pending.responder.send(Err(e));
            }
        }

        self.start_next_turn();
    }
}

/// Resolves with the in-flight reply; never resolves when there is none.
async fn wait_reply(pending: &mut Option<PendingTurn>) -> Result<IntentResult, AppError> {
    match pending {
        Some(turn) => match (&mut turn.reply).await {
            Ok(result) => result,
            Err(e) => Err(AppError::Internal(format!("reply task failed: {}", e))),
        },
        None => std::future::pending().await,
    }
}

//! Conversation panel: one chat window's history, input and round trips.
//!
//! A round trip asks the remote provider once. A usable answer is formatted
//! and shown; anything else (transport error, bad status, malformed or empty
//! body, a panicking provider) is replaced by the canned template of the
//! message's topic. A panic anywhere else in the round trip ends it with an
//! apology. Transcript entries are best-effort and never change the reply.

use crate::chat::classifier::classify;
use crate::chat::formatter::format_message;
use crate::chat::message::{ConversationMessage, MessageId, Sender};
use crate::chat::templates::{template, APOLOGY};
use crate::chat::topic::TopicLabel;
use crate::config::DEFAULT_GREETING;
use crate::observability::Logger;
use crate::provider::{CompletionProvider, CompletionRequest, CompletionResponse, ProviderError};
use futures_util::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use uuid::Uuid;

/// Reasons a submission is refused before anything happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The message is empty after trimming.
    #[error("Message is empty")]
    EmptyMessage,

    /// A previous round trip has not resolved yet.
    #[error("A reply is still pending")]
    Busy,
}

/// Where the bot reply of a round trip came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The remote provider's answer.
    Remote,
    /// The canned template of the classified topic.
    Canned(TopicLabel),
    /// The apology shown after an unexpected fault.
    Apology,
}

/// Result of one accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Id of the appended user message.
    pub user_message: MessageId,
    /// The appended bot message.
    pub bot_message: ConversationMessage,
    /// Source of the bot message.
    pub reply: Reply,
}

/// Builder for [`ChatPanel`].
pub struct ChatPanelBuilder {
    provider: Arc<dyn CompletionProvider>,
    greeting: String,
    logger: Option<Logger>,
}

impl ChatPanelBuilder {
    /// Replace the opening bot message.
    pub fn greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Write a markdown transcript of every round trip.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Open the panel, seeded with the greeting.
    pub fn build(self) -> ChatPanel {
        let panel = ChatPanel {
            id: Uuid::new_v4(),
            provider: self.provider,
            logger: self.logger,
            history: Mutex::new(Vec::new()),
            input: Mutex::new(String::new()),
            pending: AtomicBool::new(false),
            next_id: AtomicU64::new(1),
        };

        panel.push(format_message(&self.greeting), Sender::Bot);
        panel.record(|logger| {
            logger.log_session_start(&panel.id.to_string(), panel.provider.provider_name())
        });

        panel
    }
}

/// One chat window.
///
/// All methods take `&self`; the panel can be shared across tasks. At most one
/// round trip runs at a time.
pub struct ChatPanel {
    id: Uuid,
    provider: Arc<dyn CompletionProvider>,
    logger: Option<Logger>,
    history: Mutex<Vec<ConversationMessage>>,
    input: Mutex<String>,
    pending: AtomicBool,
    next_id: AtomicU64,
}

impl std::fmt::Debug for ChatPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatPanel")
            .field("id", &self.id)
            .field("provider", &self.provider.provider_name())
            .field("messages", &self.len())
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Clears the pending flag however the round trip ends.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatPanel {
    /// Panel with the default greeting and no transcript.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self::builder(provider).build()
    }

    /// Start configuring a panel.
    pub fn builder(provider: Arc<dyn CompletionProvider>) -> ChatPanelBuilder {
        ChatPanelBuilder {
            provider,
            greeting: DEFAULT_GREETING.to_string(),
            logger: None,
        }
    }

    /// Panel identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the provider behind this panel.
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Replace the input buffer.
    pub fn set_input(&self, text: impl Into<String>) {
        *lock(&self.input) = text.into();
    }

    /// Current input buffer.
    pub fn input(&self) -> String {
        lock(&self.input).clone()
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<ConversationMessage> {
        lock(&self.history).clone()
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        lock(&self.history).len()
    }

    /// Whether the history is empty. Never true for a built panel.
    pub fn is_empty(&self) -> bool {
        lock(&self.history).is_empty()
    }

    /// Whether a round trip is unresolved.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Send the input buffer.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let text = self.input();
        self.send(&text).await
    }

    /// Send a message and wait for the bot reply.
    ///
    /// The user message is appended before the remote call starts. Exactly one
    /// bot message follows it.
    pub async fn send(&self, text: &str) -> Result<SubmitOutcome, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }

        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        let _pending = PendingGuard(&self.pending);

        let user_message = self.push(text.to_string(), Sender::User);
        lock(&self.input).clear();

        let (reply, markup) = match AssertUnwindSafe(self.round_trip(text, user_message.id))
            .catch_unwind()
            .await
        {
            Ok(answer) => answer,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(panel = %self.id, "round trip failed: {}", message);

                let mut context = HashMap::new();
                context.insert("panel".to_string(), Value::String(self.id.to_string()));
                context.insert("message".to_string(), Value::from(user_message.id.value()));
                self.record(|logger| {
                    logger.log_error(&format!("Round trip failed: {}", message), Some(&context))
                });

                (Reply::Apology, format_message(APOLOGY))
            }
        };

        let bot_message = self.push(markup, Sender::Bot);

        Ok(SubmitOutcome {
            user_message: user_message.id,
            bot_message,
            reply,
        })
    }

    /// Record the end of the conversation in the transcript.
    pub fn close(&self, reason: &str) -> anyhow::Result<()> {
        match &self.logger {
            Some(logger) => logger.log_completion(reason),
            None => Ok(()),
        }
    }

    async fn round_trip(&self, text: &str, message_id: MessageId) -> (Reply, String) {
        let outcome = self.request_completion(text).await;

        self.record(|logger| logger.log_user_message(message_id.value(), text));

        match outcome {
            Ok(completion) if !completion.is_empty() => {
                self.record(|logger| {
                    logger.log_remote_reply(self.provider.provider_name(), &completion.response)
                });
                (Reply::Remote, format_message(&completion.response))
            }
            outcome => {
                let error = outcome.err().unwrap_or(ProviderError::EmptyResponse);
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    kind = error.kind(),
                    "remote completion unavailable: {}",
                    error
                );

                let label = classify(text);
                self.record(|logger| logger.log_fallback(label.as_str(), &error.to_string()));
                (Reply::Canned(label), format_message(template(label)))
            }
        }
    }

    async fn request_completion(&self, text: &str) -> Result<CompletionResponse, ProviderError> {
        let request = CompletionRequest::new(text);
        tracing::debug!(provider = self.provider.provider_name(), "requesting completion");

        match AssertUnwindSafe(self.provider.complete(&request))
            .catch_unwind()
            .await
        {
            Ok(result) => result,
            Err(payload) => Err(ProviderError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    /// Write one transcript entry. A failed write is reported and dropped.
    fn record<F>(&self, entry: F)
    where
        F: FnOnce(&Logger) -> anyhow::Result<()>,
    {
        if let Some(logger) = &self.logger {
            if let Err(e) = entry(logger) {
                tracing::warn!(panel = %self.id, "transcript write failed: {:#}", e);
            }
        }
    }

    fn push(&self, text: String, sender: Sender) -> ConversationMessage {
        let mut history = lock(&self.history);
        let id = MessageId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let message = ConversationMessage::new(id, text, sender);
        history.push(message.clone());
        message
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

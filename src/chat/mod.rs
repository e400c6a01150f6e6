//! Conversational query router.
//!
//! A [`ChatPanel`] forwards each message to the remote completion provider and,
//! when no usable answer comes back, routes the message to a topic with
//! [`classify`] and answers with that topic's canned [`template`]. Every bot
//! reply passes through [`format_message`].
//!
//! # Example
//!
//! ```no_run
//! use career_compass::chat::ChatPanel;
//! use career_compass::provider::DisabledProvider;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let panel = ChatPanel::new(Arc::new(DisabledProvider::default()));
//! let outcome = panel.send("How should I negotiate my salary offer?").await.unwrap();
//! println!("{:?}: {}", outcome.reply, outcome.bot_message.text);
//! # }
//! ```

pub mod classifier;
pub mod formatter;
pub mod message;
pub mod panel;
pub mod templates;
pub mod topic;

pub use classifier::{classify, score, TopicScore};
pub use formatter::{escape_html, format_message};
pub use message::{ConversationMessage, MessageId, Sender};
pub use panel::{ChatPanel, ChatPanelBuilder, Reply, SubmitError, SubmitOutcome};
pub use templates::{template, APOLOGY};
pub use topic::{ClassificationRule, TopicLabel, RULES};

//! Career Compass - career guidance assistant core
//!
//! Career Compass provides a set of feature-gated modules:
//!
//! - **`config`** - TOML configuration and environment loading
//! - **`observability`** - Markdown conversation transcripts
//! - **`provider`** - Remote completion boundary (Gemini, plain HTTP, disabled)
//! - **`chat`** - Keyword query router, reply formatter and chat panel
//! - **`session`** - Role session flag and dashboard routing
//! - **`account`** - Registration and login forms
//! - **`cli`** - Terminal commands behind the `career-compass` binary
//!
//! # Features
//!
//! Enable the features you need in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! career-compass = { version = "0.3", default-features = false, features = ["chat"] }
//! # Or enable everything:
//! career-compass = { version = "0.3", features = ["all"] }
//! ```
//!
//! # Example: Routing a question
//!
//! ```ignore
//! use career_compass::chat::{classify, format_message, template, TopicLabel};
//!
//! let label = classify("How should I negotiate my salary offer?");
//! assert_eq!(label, TopicLabel::SalaryInfo);
//!
//! let markup = format_message(template(label));
//! println!("{}", markup);
//! ```
//!
//! # Example: A chat panel with the configured provider
//!
//! ```ignore
//! use career_compass::chat::ChatPanel;
//! use career_compass::config::{ConfigurationLoader, EnvironmentLoader};
//! use career_compass::provider::ProviderFactory;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let env = EnvironmentLoader::new(None);
//!     let loader = ConfigurationLoader::new(None)?;
//!     let provider = ProviderFactory::create(&loader.config.provider, &env);
//!
//!     let panel = ChatPanel::new(provider);
//!     let outcome = panel.send("Can you review my resume?").await?;
//!     println!("{}", outcome.bot_message.text);
//!     Ok(())
//! }
//! ```
//!
//! # Example: Signing in
//!
//! ```ignore
//! use career_compass::account::{login, LoginForm};
//! use career_compass::session::{MemoryStore, Role, Route, SessionContext};
//!
//! let ctx = SessionContext::new(MemoryStore::new());
//! let route = login(&ctx, &LoginForm::new("ada@example.com", "pw"), Role::Student).unwrap();
//! assert_eq!(route, Route::Dashboard(Role::Student));
//! ```

#![warn(missing_docs)]

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Conversation transcripts (enabled with the `observability` feature)
#[cfg(feature = "observability")]
pub mod observability;

/// Remote completion providers (enabled with the `provider` feature)
#[cfg(feature = "provider")]
pub mod provider;

/// Query router and chat panel (enabled with the `chat` feature)
#[cfg(feature = "chat")]
pub mod chat;

/// Role session flag (enabled with the `session` feature)
#[cfg(feature = "session")]
pub mod session;

/// Account forms (enabled with the `account` feature)
#[cfg(feature = "account")]
pub mod account;

/// Terminal commands (enabled with the `cli` feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "config")]
    pub use crate::config::{Configuration, ConfigurationLoader, EnvironmentLoader};

    #[cfg(feature = "observability")]
    pub use crate::observability::Logger;

    #[cfg(feature = "provider")]
    pub use crate::provider::{
        CompletionProvider, CompletionRequest, CompletionResponse, ProviderError,
        ProviderFactory,
    };

    #[cfg(feature = "chat")]
    pub use crate::chat::{
        classify, format_message, template, ChatPanel, ConversationMessage, Reply, SubmitError,
        TopicLabel,
    };

    #[cfg(feature = "session")]
    pub use crate::session::{FileStore, MemoryStore, Role, Route, SessionContext, SessionStore};

    #[cfg(feature = "account")]
    pub use crate::account::{login, register, LoginForm, RegistrationForm, ValidationError};
}

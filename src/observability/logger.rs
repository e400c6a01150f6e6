//! Markdown transcript logger for chat panels.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logger for conversation round trips.
///
/// Creates a markdown file with one entry per event: session start, user
/// messages, remote replies, canned fallbacks and errors. Console output goes
/// through `tracing`.
#[derive(Debug)]
pub struct Logger {
    log_file: PathBuf,
    log_level: String,
}

impl Logger {
    /// Initialize logger.
    ///
    /// # Arguments
    /// * `log_file` - Path to log file. If None, creates a timestamped file in temp directory.
    /// * `log_level` - Logging level (defaults to "INFO").
    pub fn new(log_file: Option<&Path>, log_level: Option<&str>) -> Result<Self> {
        let log_file = match log_file {
            Some(p) => p.to_path_buf(),
            None => {
                let dir = std::env::temp_dir().join("career-compass");
                dir.join(format!(
                    "compass_{}_{}.md",
                    Utc::now().timestamp_millis(),
                    std::process::id()
                ))
            }
        };

        let log_level = log_level.unwrap_or("INFO").to_uppercase();

        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let logger = Self {
            log_file,
            log_level,
        };

        if !logger.log_file.exists() {
            logger.initialize_log_file()?;
        }

        Ok(logger)
    }

    /// Initialize the log file with header.
    fn initialize_log_file(&self) -> Result<()> {
        let mut file = File::create(&self.log_file)
            .with_context(|| format!("Failed to create log file: {}", self.log_file.display()))?;

        let now: DateTime<Utc> = Utc::now();

        writeln!(file, "# Career Compass Conversation Log\n")?;
        writeln!(file, "Log started: {}\n", now.to_rfc3339())?;
        writeln!(file, "---\n")?;

        Ok(())
    }

    /// Append content to log file.
    fn append_to_log(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Failed to open log file: {}", self.log_file.display()))?;

        write!(file, "{}", content).with_context(|| "Failed to write to log file")?;

        Ok(())
    }

    fn is_debug(&self) -> bool {
        self.log_level == "DEBUG"
    }

    /// Log the opening of a chat panel.
    ///
    /// # Arguments
    /// * `panel_id` - Identifier of the panel.
    /// * `provider` - Name of the completion provider in use.
    pub fn log_session_start(&self, panel_id: &str, provider: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "## Session Started - {}\n\n**Panel:** {}\n**Provider:** {}\n\n",
            now.to_rfc3339(),
            panel_id,
            provider
        );

        self.append_to_log(&content)?;
        tracing::info!(panel = panel_id, provider, "chat session started");
        Ok(())
    }

    /// Log a submitted user message.
    pub fn log_user_message(&self, message_id: u64, text: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### User Message #{} - {}\n\n```\n{}\n```\n\n",
            message_id,
            now.to_rfc3339(),
            text
        );

        self.append_to_log(&content)
    }

    /// Log a reply produced by the remote provider.
    ///
    /// The full response text is only written at DEBUG level; otherwise the
    /// entry records its size.
    pub fn log_remote_reply(&self, provider: &str, response: &str) -> Result<()> {
        if response.trim().is_empty() {
            tracing::debug!("skipping log entry for empty remote reply");
            return Ok(());
        }

        let now: DateTime<Utc> = Utc::now();
        let body = if self.is_debug() {
            format!("**Response:**\n```\n{}\n```\n\n", response)
        } else {
            format!("**Response:** {} characters\n\n", response.chars().count())
        };

        let content = format!(
            "### Remote Reply - {}\n\n**Provider:** {}\n\n{}",
            now.to_rfc3339(),
            provider,
            body
        );

        self.append_to_log(&content)?;
        tracing::info!(provider, "remote reply logged");
        Ok(())
    }

    /// Log a canned fallback reply.
    ///
    /// # Arguments
    /// * `topic` - Topic label the message was classified into.
    /// * `reason` - Why the remote reply was not used.
    pub fn log_fallback(&self, topic: &str, reason: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### Canned Reply - {}\n\n**Topic:** {}\n**Reason:** {}\n\n",
            now.to_rfc3339(),
            topic,
            reason
        );

        self.append_to_log(&content)?;
        tracing::info!(topic, reason, "canned reply used");
        Ok(())
    }

    /// Log error with context.
    ///
    /// # Arguments
    /// * `error` - Error message.
    /// * `context` - Additional context information.
    pub fn log_error(
        &self,
        error: &str,
        context: Option<&HashMap<String, serde_json::Value>>,
    ) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let mut content = format!(
            "### Error - {}\n\n**Error:** {}\n\n",
            now.to_rfc3339(),
            error
        );

        if let Some(ctx) = context {
            content.push_str(&format!(
                "**Context:** {}\n\n",
                serde_json::to_string_pretty(ctx).unwrap_or_default()
            ));
        }

        self.append_to_log(&content)?;
        tracing::error!("{}", error);
        Ok(())
    }

    /// Log session completion.
    ///
    /// # Arguments
    /// * `reason` - Reason for completion.
    pub fn log_completion(&self, reason: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### Session Completed - {}\n\n**Reason:** {}\n\n---\n\n",
            now.to_rfc3339(),
            reason
        );

        self.append_to_log(&content)?;
        tracing::info!(reason, "chat session completed");
        Ok(())
    }

    /// Get the log file path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Get the log level.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[cfg(test)]
mod tests;

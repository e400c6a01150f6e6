//! Chat commands: interactive loop and single questions.

use crate::chat::{ChatPanel, SubmitError};
use crate::cli::context::CommandContext;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{bot_prefix, to_plain_text};
use colored::*;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Command that ends the interactive loop.
pub const QUIT_COMMAND: &str = "/quit";

/// Options for a single question
#[derive(Debug, Clone)]
pub struct AskOptions {
    /// The question, as typed.
    pub query: String,
    /// Print terminal text instead of markup.
    pub plain: bool,
}

fn render(markup: &str, plain: bool) -> String {
    if plain {
        to_plain_text(markup)
    } else {
        markup.to_string()
    }
}

/// Ask one question and print the bot reply.
pub async fn ask<C: CommandContext, W: Write>(
    ctx: &C,
    opts: &AskOptions,
    out: &mut W,
) -> CliResult<()> {
    let panel = ctx.open_panel()?;
    let outcome = panel.send(&opts.query).await?;

    tracing::info!(reply = ?outcome.reply, "question answered");
    writeln!(out, "{}", render(&outcome.bot_message.text, opts.plain))?;

    panel.close("single question answered")?;
    Ok(())
}

/// Run the interactive loop until `/quit` or end of input.
///
/// Blank lines are skipped. Bot replies are printed as terminal text unless
/// `markup` is set.
pub async fn chat<C, R, W>(ctx: &C, input: R, out: &mut W, markup: bool) -> CliResult<()>
where
    C: CommandContext,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let panel = ctx.open_panel()?;
    let name = ctx.config().assistant.name.clone();

    print_greeting(&panel, &name, out, markup)?;
    writeln!(out, "{}", format!("(type {} to leave)", QUIT_COMMAND).dimmed())?;

    let mut lines = input.lines();
    let reason = loop {
        write!(out, "{} ", "you>".green().bold())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break "end of input";
        };
        if line.trim() == QUIT_COMMAND {
            break "user quit";
        }

        match panel.send(&line).await {
            Ok(outcome) => {
                writeln!(
                    out,
                    "{} {}",
                    bot_prefix(&name),
                    render(&outcome.bot_message.text, !markup)
                )?;
            }
            Err(SubmitError::EmptyMessage) => continue,
            Err(e) => return Err(CliError::Submit(e)),
        }
    };

    writeln!(out)?;
    panel.close(reason)?;
    Ok(())
}

fn print_greeting<W: Write>(
    panel: &ChatPanel,
    name: &str,
    out: &mut W,
    markup: bool,
) -> CliResult<()> {
    if let Some(greeting) = panel.history().first() {
        writeln!(out, "{} {}", bot_prefix(name), render(&greeting.text, !markup))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{format_message, template, TopicLabel};
    use crate::cli::test_utils::MockCommandContext;

    #[tokio::test]
    async fn test_ask_falls_back_to_markup_template() {
        let ctx = MockCommandContext::new();
        let mut out = Vec::new();

        ask(
            &ctx,
            &AskOptions {
                query: "How should I negotiate my salary offer?".to_string(),
                plain: false,
            },
            &mut out,
        )
        .await
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed.trim_end(),
            format_message(template(TopicLabel::SalaryInfo))
        );
    }

    #[tokio::test]
    async fn test_ask_plain_uses_remote_answer() {
        let ctx = MockCommandContext::with_reply("**Negotiate** with data");
        let mut out = Vec::new();

        ask(
            &ctx,
            &AskOptions {
                query: "salary?".to_string(),
                plain: true,
            },
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Negotiate with data\n");
        assert_eq!(ctx.prompts(), vec!["salary?".to_string()]);
    }

    #[tokio::test]
    async fn test_ask_rejects_blank_question() {
        let ctx = MockCommandContext::with_reply("unused");
        let mut out = Vec::new();

        let result = ask(
            &ctx,
            &AskOptions {
                query: "   ".to_string(),
                plain: true,
            },
            &mut out,
        )
        .await;

        assert!(matches!(
            result,
            Err(CliError::Submit(SubmitError::EmptyMessage))
        ));
        assert!(ctx.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_chat_loop_until_quit() {
        let ctx = MockCommandContext::with_reply("Happy to help");
        let input: &[u8] = b"hello\n\n   \nanother\n/quit\nnever sent\n";
        let mut out = Vec::new();

        chat(&ctx, input, &mut out, false).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Happy to help").count(), 2);
        assert!(printed.contains("How can I help you today?"));
        assert_eq!(ctx.prompts(), vec!["hello".to_string(), "another".to_string()]);

        let transcript = std::fs::read_to_string(&ctx.config.logging.log_file).unwrap();
        assert!(transcript.contains("user quit"));
    }

    #[tokio::test]
    async fn test_chat_ends_at_end_of_input() {
        let ctx = MockCommandContext::new();
        let input: &[u8] = b"I feel burnout\n";
        let mut out = Vec::new();

        chat(&ctx, input, &mut out, false).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Based on research from top companies"));
        let transcript = std::fs::read_to_string(&ctx.config.logging.log_file).unwrap();
        assert!(transcript.contains("end of input"));
        assert!(transcript.contains("workLifeBalance"));
    }
}

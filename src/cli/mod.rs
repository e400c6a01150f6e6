//! Terminal surface for the assistant.
//!
//! [`run`] dispatches a parsed [`Cli`] to the command implementations in
//! [`commands`]. Commands reach configuration, the completion provider, the
//! transcript and the session store through a [`CommandContext`].
//!
//! # Example
//!
//! ```rust,no_run
//! use career_compass::cli::{run, Cli};
//! use clap::Parser;
//!
//! # async fn demo() -> career_compass::cli::CliResult<()> {
//! run(Cli::parse()).await
//! # }
//! ```

pub mod args;
pub mod commands;
pub mod context;
pub mod error;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use args::{Cli, Commands};
pub use context::{CommandContext, CompassContext};
pub use error::{CliError, CliResult};

use commands::account::RegisterOptions;
use commands::chat::AskOptions;
use tokio::io::{AsyncReadExt, BufReader};

/// Run one parsed command line against the real configuration.
pub async fn run(cli: Cli) -> CliResult<()> {
    let mut stdout = std::io::stdout();

    // text commands never need configuration
    match &cli.command {
        Commands::Classify { json, query } => {
            return commands::text::classify_query(&query.join(" "), *json, &mut stdout);
        }
        Commands::Format => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            return commands::text::format_text(&input, &mut stdout);
        }
        _ => {}
    }

    let ctx = CompassContext::load(cli.config.as_deref(), cli.env_file.as_deref())?;

    match cli.command {
        Commands::Chat { markup } => {
            let input = BufReader::new(tokio::io::stdin());
            commands::chat::chat(&ctx, input, &mut stdout, markup).await
        }
        Commands::Ask { plain, query } => {
            let opts = AskOptions {
                query: query.join(" "),
                plain,
            };
            commands::chat::ask(&ctx, &opts, &mut stdout).await
        }
        Commands::Register {
            role,
            name,
            email,
            password,
            confirm,
            institution,
            specializations,
            interests,
            skills,
        } => {
            let opts = RegisterOptions {
                role,
                name,
                email,
                password,
                confirm,
                institution,
                specializations,
                interests,
                skills,
            };
            commands::account::register(&ctx, &opts, &mut stdout)
        }
        Commands::Login {
            email,
            password,
            role,
        } => commands::account::login(&ctx, &email, &password, role, &mut stdout),
        Commands::Dashboard => commands::account::dashboard(&ctx, &mut stdout),
        Commands::Logout => commands::account::logout(&ctx, &mut stdout),
        Commands::Classify { .. } | Commands::Format => Ok(()),
    }
}

//! Command-line argument parsing.

use crate::session::Role;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Career Compass command line
#[derive(Parser, Debug)]
#[command(name = "career-compass")]
#[command(about = "Career guidance assistant with a keyword-routed chatbot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a .env file with GEMINI_API_KEY and overrides
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat interactively; type /quit to leave
    Chat {
        /// Print bot replies as markup instead of plain text
        #[arg(long)]
        markup: bool,
    },

    /// Ask a single question
    Ask {
        /// Print plain text instead of markup
        #[arg(long)]
        plain: bool,

        /// The question
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show the topic a query is routed to, with per-topic scores
    Classify {
        /// Output JSON
        #[arg(long)]
        json: bool,

        /// The query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Format text read from stdin into chat markup
    Format,

    /// Register an account and sign in
    Register {
        /// Role to register as
        #[arg(long, value_parser = parse_role)]
        role: Role,

        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,

        /// School, college or employer
        #[arg(long)]
        institution: Option<String>,

        /// Counselor specialization (repeatable)
        #[arg(long = "specialization")]
        specializations: Vec<String>,

        /// Student interest (repeatable)
        #[arg(long = "interest")]
        interests: Vec<String>,

        /// Student skill (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,
    },

    /// Sign in
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Role to sign in as
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },

    /// Show where the current session lands
    Dashboard,

    /// Sign out
    Logout,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::try_parse_from(["career-compass", "ask", "--plain", "salary", "tips"]).unwrap();
        match cli.command {
            Commands::Ask { plain, query } => {
                assert!(plain);
                assert_eq!(query, vec!["salary".to_string(), "tips".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_register_arguments() {
        let cli = Cli::try_parse_from([
            "career-compass",
            "--config",
            "compass.toml",
            "register",
            "--role",
            "counselor",
            "--name",
            "Grace",
            "--email",
            "grace@example.com",
            "--password",
            "pw",
            "--specialization",
            "Life Coaching",
            "--specialization",
            "Skills Assessment",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("compass.toml")));
        match cli.command {
            Commands::Register {
                role,
                specializations,
                confirm,
                ..
            } => {
                assert_eq!(role, Role::Counselor);
                assert_eq!(specializations.len(), 2);
                assert_eq!(confirm, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from([
            "career-compass",
            "login",
            "--email",
            "a@b.c",
            "--password",
            "pw",
            "--role",
            "mentor",
        ]);
        assert!(result.is_err());
    }
}

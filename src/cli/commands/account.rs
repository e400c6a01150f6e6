//! Account commands: register, login, dashboard, logout.

use crate::account::{self, LoginForm, RegistrationForm};
use crate::cli::context::CommandContext;
use crate::cli::error::CliResult;
use crate::session::{Role, Route};
use colored::*;
use std::io::Write;

/// Options for registering an account
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Role to register as.
    pub role: Role,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Confirmation; the password itself when absent.
    pub confirm: Option<String>,
    /// School, college or employer.
    pub institution: Option<String>,
    /// Counselor specializations.
    pub specializations: Vec<String>,
    /// Student interests.
    pub interests: Vec<String>,
    /// Student skills.
    pub skills: Vec<String>,
}

impl RegisterOptions {
    /// Fill a registration form from the options.
    pub fn to_form(&self) -> RegistrationForm {
        let mut form = RegistrationForm::new(self.role);
        form.full_name = self.name.clone();
        form.email = self.email.clone();
        form.password = self.password.clone();
        form.confirm_password = self
            .confirm
            .clone()
            .unwrap_or_else(|| self.password.clone());
        form.institution = self.institution.clone();

        for specialization in &self.specializations {
            if !form.specializations.contains(specialization) {
                form.toggle_specialization(specialization);
            }
        }
        for interest in &self.interests {
            form.add_interest(interest);
        }
        for skill in &self.skills {
            form.add_skill(skill);
        }
        form
    }
}

fn print_route<W: Write>(route: Route, out: &mut W) -> CliResult<()> {
    match route {
        Route::Dashboard(role) => writeln!(
            out,
            "{} {} ({})",
            "→".green(),
            route.path(),
            role.as_str().bold()
        )?,
        Route::Login => writeln!(out, "{} {}", "→".yellow(), route.path())?,
    }
    Ok(())
}

/// Register and sign in.
pub fn register<C: CommandContext, W: Write>(
    ctx: &C,
    opts: &RegisterOptions,
    out: &mut W,
) -> CliResult<()> {
    let route = account::register(&ctx.session(), &opts.to_form())?;
    writeln!(out, "{}", format!("Registered {} as {}", opts.email, opts.role).green())?;
    print_route(route, out)
}

/// Sign in as `role`.
pub fn login<C: CommandContext, W: Write>(
    ctx: &C,
    email: &str,
    password: &str,
    role: Role,
    out: &mut W,
) -> CliResult<()> {
    let route = account::login(&ctx.session(), &LoginForm::new(email, password), role)?;
    print_route(route, out)
}

/// Print where the current session lands.
pub fn dashboard<C: CommandContext, W: Write>(ctx: &C, out: &mut W) -> CliResult<()> {
    let session = ctx.session();
    let route = session.dashboard_route()?;
    print_route(route, out)?;

    if let Some(profile) = session.user_data()? {
        if let Some(name) = profile.get("fullName").and_then(|v| v.as_str()) {
            writeln!(out, "Welcome back, {}!", name)?;
        }
    }
    Ok(())
}

/// Sign out.
pub fn logout<C: CommandContext, W: Write>(ctx: &C, out: &mut W) -> CliResult<()> {
    let route = account::logout(&ctx.session())?;
    writeln!(out, "Signed out.")?;
    print_route(route, out)
}

//! Form submission against a session context.

use crate::account::error::AccountResult;
use crate::account::forms::{LoginForm, RegistrationForm};
use crate::session::{Role, Route, SessionContext, SessionStore};

/// Register a user: validate, store the profile and set the role flag.
///
/// Returns the dashboard the user lands on. A rejected form leaves the
/// session untouched; the role flag is only set once the profile is stored.
pub fn register<S: SessionStore>(
    ctx: &SessionContext<S>,
    form: &RegistrationForm,
) -> AccountResult<Route> {
    form.validate()?;

    ctx.set_user_data(&form.profile())?;
    ctx.sign_in(form.role)?;

    tracing::info!(role = form.role.as_str(), "account registered");
    Ok(Route::Dashboard(form.role))
}

/// Sign in as `role`. There is no credential check; any filled form is
/// accepted. A profile left by an earlier registration is dropped.
pub fn login<S: SessionStore>(
    ctx: &SessionContext<S>,
    form: &LoginForm,
    role: Role,
) -> AccountResult<Route> {
    form.validate()?;

    ctx.clear_user_data()?;
    ctx.sign_in(role)?;
    Ok(Route::Dashboard(role))
}

/// Sign out and return to the login page.
pub fn logout<S: SessionStore>(ctx: &SessionContext<S>) -> AccountResult<Route> {
    ctx.sign_out()?;
    Ok(Route::Login)
}

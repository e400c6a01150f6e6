//! Session flag and dashboard routing.

use crate::session::error::SessionResult;
use crate::session::role::Role;
use crate::session::store::SessionStore;
use serde::{Deserialize, Serialize};

/// Key holding the signed-in role.
pub const USER_ROLE_KEY: &str = "userRole";
/// Key holding the registered profile as JSON.
pub const USER_DATA_KEY: &str = "userData";

/// Where a visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "role", rename_all = "lowercase")]
pub enum Route {
    /// Dashboard of the signed-in role.
    Dashboard(Role),
    /// No valid role flag; sign in first.
    Login,
}

impl Route {
    /// Path of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard(role) => role.dashboard_path(),
            Self::Login => "/login",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Explicit session state over a flag store.
///
/// The role flag is the only sign-in state; there is no credential check.
#[derive(Debug)]
pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Signed-in role. An unknown flag value counts as signed out.
    pub fn role(&self) -> SessionResult<Option<Role>> {
        let raw = self.store.get(USER_ROLE_KEY)?;
        Ok(raw.and_then(|value| match value.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                tracing::warn!("ignoring unknown role flag '{}'", value);
                None
            }
        }))
    }

    /// Whether a valid role flag is set.
    pub fn is_signed_in(&self) -> SessionResult<bool> {
        Ok(self.role()?.is_some())
    }

    /// Set the role flag.
    pub fn sign_in(&self, role: Role) -> SessionResult<()> {
        self.store.set(USER_ROLE_KEY, role.as_str())?;
        tracing::info!(role = role.as_str(), "signed in");
        Ok(())
    }

    /// Clear the role flag and the stored profile.
    pub fn sign_out(&self) -> SessionResult<()> {
        self.store.remove(USER_ROLE_KEY)?;
        self.store.remove(USER_DATA_KEY)?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Store the profile.
    pub fn set_user_data(&self, data: &serde_json::Value) -> SessionResult<()> {
        self.store.set(USER_DATA_KEY, &serde_json::to_string(data)?)
    }

    /// Drop the stored profile, keeping the role flag.
    pub fn clear_user_data(&self) -> SessionResult<()> {
        self.store.remove(USER_DATA_KEY)
    }

    /// Stored profile. A value that is not JSON reads as absent.
    pub fn user_data(&self) -> SessionResult<Option<serde_json::Value>> {
        let raw = self.store.get(USER_DATA_KEY)?;
        Ok(raw.and_then(|value| serde_json::from_str(&value).ok()))
    }

    /// Dashboard of the signed-in role, or the login page.
    pub fn dashboard_route(&self) -> SessionResult<Route> {
        Ok(match self.role()? {
            Some(role) => Route::Dashboard(role),
            None => Route::Login,
        })
    }
}

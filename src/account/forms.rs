//! Registration and login forms.

use crate::account::error::ValidationError;
use crate::session::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Specializations offered on the counselor form.
pub const SPECIALIZATION_OPTIONS: [&str; 10] = [
    "Career Counseling",
    "Academic Guidance",
    "Mental Health Counseling",
    "Vocational Rehabilitation",
    "Educational Psychology",
    "Student Development",
    "Life Coaching",
    "Employment Counseling",
    "College Admissions",
    "Skills Assessment",
];

/// Fragments that mark an email address as institutional.
pub const INSTITUTIONAL_EMAIL_MARKERS: [&str; 6] =
    [".edu", ".ac.", ".edu.", "university", "college", "institute"];

/// Whether an email address looks like it belongs to an institution.
pub fn is_institutional_email(email: &str) -> bool {
    let email = email.to_lowercase();
    INSTITUTIONAL_EMAIL_MARKERS
        .iter()
        .any(|marker| email.contains(marker))
}

/// Add `value` trimmed, unless it is blank or already present.
fn add_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

/// Sign-up form shared by the three roles.
///
/// Role-specific fields are ignored for the other roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// Role being registered.
    pub role: Role,
    /// Display name.
    pub full_name: String,
    /// Contact and login address.
    pub email: String,
    /// Chosen password.
    #[serde(skip_serializing)]
    pub password: String,
    /// Password typed a second time.
    #[serde(skip_serializing)]
    pub confirm_password: String,
    /// School, college or employer.
    #[serde(default)]
    pub institution: Option<String>,
    /// Counselor specializations.
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Student interests.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Student skills.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl RegistrationForm {
    /// Empty form for `role`.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            institution: None,
            specializations: Vec::new(),
            interests: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Add an interest. Returns false when it was blank or a duplicate.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        add_unique(&mut self.interests, interest)
    }

    /// Remove an interest.
    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|existing| existing != interest);
    }

    /// Add a skill. Returns false when it was blank or a duplicate.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        add_unique(&mut self.skills, skill)
    }

    /// Remove a skill.
    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|existing| existing != skill);
    }

    /// Select a specialization, or deselect it if already selected.
    pub fn toggle_specialization(&mut self, specialization: &str) {
        if self.specializations.iter().any(|s| s == specialization) {
            self.specializations.retain(|s| s != specialization);
        } else {
            self.specializations.push(specialization.to_string());
        }
    }

    /// Check the form. The first failing rule is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        match self.role {
            Role::Counselor if self.specializations.is_empty() => {
                Err(ValidationError::MissingSpecialization)
            }
            Role::Admin if !is_institutional_email(&self.email) => {
                Err(ValidationError::InstitutionalEmailRequired)
            }
            _ => Ok(()),
        }
    }

    /// Profile stored after registration. Passwords are left out.
    pub fn profile(&self) -> serde_json::Value {
        let mut profile = serde_json::json!({
            "role": self.role,
            "fullName": self.full_name.trim(),
            "email": self.email.trim(),
            "registeredAt": Utc::now().to_rfc3339(),
        });

        if let Some(institution) = self.institution.as_deref().filter(|i| !i.trim().is_empty()) {
            profile["institution"] = serde_json::json!(institution.trim());
        }

        match self.role {
            Role::Student => {
                profile["interests"] = serde_json::json!(self.interests);
                profile["skills"] = serde_json::json!(self.skills);
            }
            Role::Counselor => {
                profile["specializations"] = serde_json::json!(self.specializations);
            }
            Role::Admin => {}
        }

        profile
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    /// Login address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Form with both fields filled in.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

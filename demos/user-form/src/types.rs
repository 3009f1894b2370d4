//! Domain types for the registration form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Banner shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// One of the five form inputs
///
/// Serializes to (and parses from) the input names used by the markup:
/// `username`, `email`, `age`, `password`, `confirmPassword`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Account name
    Username,
    /// Contact address
    Email,
    /// Age in years, entered as text
    Age,
    /// Chosen password
    Password,
    /// Repeated password
    ConfirmPassword,
}

impl FormField {
    /// Every field, in display order
    pub const ALL: [Self; 5] = [
        Self::Username,
        Self::Email,
        Self::Age,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Input name of the field
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Age => "age",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when an input name matches no form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldError(pub String);

impl std::str::FromStr for FormField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Raw values of the five inputs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// Username input
    pub username: String,
    /// Email input
    pub email: String,
    /// Age input (kept as text, parsed during validation)
    pub age: String,
    /// Password input
    pub password: String,
    /// Password confirmation input
    pub confirm_password: String,
}

impl FormData {
    /// Current value of `field`
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Age => &self.age,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value of `field`
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Age => &mut self.age,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Recompute every field error from scratch
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        crate::validation::validate(self)
    }

    /// `true` when every input is empty
    #[must_use]
    pub fn is_blank(&self) -> bool {
        FormField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// Per-field error messages
///
/// A missing entry means the field passed its last validation, or was
/// edited since.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    /// No errors
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record `message` for `field`, replacing any previous one
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the entry for `field`; returns the removed message
    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    /// Message for `field`, if it is currently invalid
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` currently has an error
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of invalid fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no field has an error
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Where the form is in its submission lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Editable, nothing in flight
    #[default]
    Idle,
    /// Validation passed and the simulated request is pending
    Submitting {
        /// Identifies this submission; stale completions carry another ticket
        ticket: u64,
    },
    /// The last submission finished successfully
    Submitted,
}

/// Why a submit attempt did not start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// One or more fields failed validation
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),

    /// Another submission is still pending
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Full state of the registration form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFormState {
    /// Input values
    pub data: FormData,
    /// Current field errors
    pub errors: FormErrors,
    /// Submission lifecycle
    pub status: SubmissionStatus,
    /// When the last successful submission finished
    pub submitted_at: Option<DateTime<Utc>>,
    next_ticket: u64,
}

impl UserFormState {
    /// Empty, idle form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value` and drop that field's error
    ///
    /// Other fields' errors are left alone. A `Submitted` form returns to
    /// `Idle`; a pending submission is unaffected.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.remove(field);
        if self.status == SubmissionStatus::Submitted {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Recompute the error map for the current values
    ///
    /// Pure: stored errors are not touched.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        self.data.validate()
    }

    /// Validate and, if everything passes, enter `Submitting`
    ///
    /// On success returns the ticket the completion must carry. On a
    /// validation failure the errors are stored and the form is `Idle`.
    ///
    /// # Errors
    ///
    /// - [`SubmitRejected::AlreadySubmitting`] while a submission is pending;
    ///   state is unchanged.
    /// - [`SubmitRejected::Invalid`] with the fresh error map.
    pub fn begin_submit(&mut self) -> Result<u64, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        self.status = SubmissionStatus::Idle;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.status = SubmissionStatus::Submitting { ticket };
        Ok(ticket)
    }

    /// Finish the submission identified by `ticket`
    ///
    /// Clears every field and error and marks the form `Submitted`. Returns
    /// `false` and changes nothing when `ticket` is not the pending one
    /// (for example after a reset).
    pub fn complete_submit(&mut self, ticket: u64, at: DateTime<Utc>) -> bool {
        if self.status != (SubmissionStatus::Submitting { ticket }) {
            return false;
        }

        self.data = FormData::default();
        self.errors.clear();
        self.status = SubmissionStatus::Submitted;
        self.submitted_at = Some(at);
        true
    }

    /// Clear all values, errors, and status
    ///
    /// The success stamp is dropped with the status. A pending submission is
    /// abandoned: its completion will be ignored.
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
        self.submitted_at = None;
    }

    /// Whether a submission is pending (the submit control is disabled)
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting { .. })
    }

    /// Whether the last submission succeeded and nothing changed since
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Current error for `field`
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Label of the submit control
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// Success banner, shown only in the `Submitted` state
    #[must_use]
    pub fn success_message(&self) -> Option<&'static str> {
        self.is_submitted().then_some(SUCCESS_MESSAGE)
    }
}

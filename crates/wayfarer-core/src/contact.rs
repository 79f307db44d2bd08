// crates/wayfarer-core/src/contact.rs

//! Contact form validation.
//!
//! Submission is simulated: a valid form produces a receipt and nothing is
//! sent anywhere.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// Every failing field, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: ContactField, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Confirmation of a (simulated) submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub name: String,
    pub confirmation: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check all fields on their trimmed values.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ContactField::Name, "Name is required");
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.push(ContactField::Name, "Name must be at least 2 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(ContactField::Email, "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ContactField::Message, "Message is required");
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(ContactField::Message, "Message must be at least 10 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and "submit".
    pub fn submit(&self) -> Result<SubmissionReceipt, ValidationErrors> {
        self.validate()?;
        let name = self.name.trim().to_string();
        tracing::info!(%name, "contact form submitted");
        Ok(SubmissionReceipt {
            confirmation: format!("Thank you, {name}! Your message has been received."),
            name,
        })
    }
}

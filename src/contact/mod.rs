use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::info;
use uuid::Uuid;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
}

/// A contact-form submission as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContact {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !EMAIL.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// A stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// In-process store for contact-form submissions.
pub struct ContactStore {
    messages: Vec<ContactMessage>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Validate and store a submission.
    pub fn create(&mut self, submission: NewContact) -> Result<ContactMessage, ContactError> {
        submission.validate()?;

        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: submission.name.trim().to_string(),
            email: submission.email.trim().to_string(),
            subject: submission.subject.trim().to_string(),
            message: submission.message,
            created_at: Utc::now(),
        };
        info!(id = %message.id, "contact message stored");
        self.messages.push(message.clone());
        Ok(message)
    }

    /// All submissions, newest first.
    pub fn list(&self) -> Vec<ContactMessage> {
        self.messages.iter().rev().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Contact Form
//!
//! Validation for the "Get in Touch" form and the seam where a validated
//! submission is handed off. Network delivery is not part of this crate;
//! the bundled [`LogSink`] records submissions through `tracing`.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from validating or delivering a contact message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more fields were blank
    #[error("Please fill in all fields")]
    MissingFields,

    /// Email did not look like `name@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The sink could not deliver the message
    #[error("Failed to send message: {0}")]
    Delivery(String),
}

/// Raw form fields as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

/// A validated message ready for delivery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name (trimmed)
    pub name: String,
    /// Sender email (trimmed)
    pub email: String,
    /// Message body (trimmed)
    pub message: String,
}

impl ContactSubmission {
    /// Part of the email after the last `@`
    #[must_use]
    pub fn email_domain(&self) -> &str {
        self.email.rsplit('@').next().unwrap_or_default()
    }
}

impl ContactForm {
    /// Check the fields and produce a submission
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] when any field is blank,
    /// [`ContactError::InvalidEmail`] when the email fails [`is_valid_email`].
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Reset every field
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Loose email check: some whitespace-free run `X@Y.Z` with X, Y, Z non-empty
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        // earliest '@' with something before it, then a '.' with at least
        // one char on each side between it and the end
        let Some(at) = chars.iter().skip(1).position(|c| *c == '@').map(|i| i + 1) else {
            return false;
        };
        chars
            .get(at + 2..chars.len().saturating_sub(1))
            .is_some_and(|between| between.contains(&'.'))
    })
}

/// Where validated submissions go
#[async_trait]
pub trait ContactSink: Send + Sync {
    /// Deliver one submission
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] when the message could not be sent.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Sink that records submissions in the log and nothing else
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[async_trait]
impl ContactSink for LogSink {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::info!(
            name_len = submission.name.chars().count(),
            email_domain = submission.email_domain(),
            message_len = submission.message.chars().count(),
            "Contact message received"
        );
        Ok(())
    }
}

/// User-facing result of a submit attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Delivered; the form should be cleared
    Sent,
    /// Validation or delivery failed; the form keeps its contents
    Rejected(ContactError),
}

impl ContactOutcome {
    /// Validate and deliver a form
    pub async fn submit(form: &ContactForm, sink: &dyn ContactSink) -> Self {
        let submission = match form.validate() {
            Ok(s) => s,
            Err(e) => return Self::Rejected(e),
        };

        match sink.deliver(&submission).await {
            Ok(()) => Self::Sent,
            Err(e) => {
                tracing::warn!(error = %e, "Contact message delivery failed");
                Self::Rejected(e)
            }
        }
    }

    /// Toast text for this outcome
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Sent => "Your message was sent successfully!".to_string(),
            Self::Rejected(e) => e.to_string(),
        }
    }

    /// Whether the message went out
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

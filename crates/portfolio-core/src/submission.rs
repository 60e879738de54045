//! Simulated contact form submission.
//!
//! Nothing leaves the page: a submission captures the values, flips the
//! submit button through its phases, and is logged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "✨ Message Sent! ✨";
pub const SENT_PROGRESS_TEXT: &str = "Message sent successfully! 🎉";

/// State of the submit button.
///
/// `Idle → Sending → Sent → Idle`. Only `Idle` accepts a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => SEND_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
            SubmitPhase::Sent => SENT_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }

    /// Extra class on the submit button
    pub fn class(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "",
            SubmitPhase::Sending => "loading",
            SubmitPhase::Sent => "sent",
        }
    }
}

/// Values captured at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A captured submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub values: ContactValues,
    pub submitted_at: DateTime<Utc>,
    /// Generation of the form at capture time; reset tasks carry it too
    pub generation: u64,
}

impl Submission {
    pub fn capture(values: ContactValues, generation: u64) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
            generation,
        }
    }
}

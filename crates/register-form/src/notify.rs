//! Submission acknowledgments and the channel that delivers them to the user.

use std::fmt;

use crate::error::SubmitError;

/// Outcome of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    Submitted,
    Rejected(SubmitError),
}

impl Acknowledgment {
    /// The plain success flag for the submission
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgment::Submitted)
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acknowledgment::Submitted => f.write_str("Form submitted successfully!"),
            Acknowledgment::Rejected(err) => write!(f, "{}", err),
        }
    }
}

impl From<Result<(), SubmitError>> for Acknowledgment {
    fn from(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Acknowledgment::Submitted,
            Err(err) => Acknowledgment::Rejected(err),
        }
    }
}

/// Delivers acknowledgments to the user (alert box, toast, status line, ...)
pub trait Notifier {
    fn notify(&mut self, ack: &Acknowledgment);
}

impl<F> Notifier for F
where
    F: FnMut(&Acknowledgment),
{
    fn notify(&mut self, ack: &Acknowledgment) {
        self(ack)
    }
}

/// Writes acknowledgments to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, ack: &Acknowledgment) {
        if ack.is_success() {
            tracing::info!("{}", ack);
        } else {
            tracing::warn!("{}", ack);
        }
    }
}

/// Keeps every acknowledgment message it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(|s| s.as_str())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, ack: &Acknowledgment) {
        self.messages.push(ack.message());
    }
}

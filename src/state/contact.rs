// Contact state - form buffer and submission status
use crate::io::{FailureReason, RelayCommand, RelayResult, SenderContext, SubmissionFailed};
use crate::model::ContactForm;
use std::sync::mpsc::Sender;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
    Invalid(String),
}

impl SubmissionStatus {
    /// Status line shown under the form. Empty when idle.
    pub fn text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Sending => "Sending...",
            Self::Sent => "Message sent successfully ✅",
            Self::Failed(_) => "Failed to send ❌",
            Self::Invalid(reason) => reason,
        }
    }

    /// Underlying failure reason, shown on hover.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Invalid(_))
    }
}

pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Queue the current form for delivery.
    ///
    /// Returns false if nothing was queued: a previous send is still pending,
    /// the form is incomplete, or the worker is gone.
    pub fn submit(&mut self, commands: &Sender<RelayCommand>, site: &str) -> bool {
        if self.is_pending() {
            return false;
        }
        if let Err(reason) = self.form.validate() {
            self.status = SubmissionStatus::Invalid(reason);
            return false;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let command = RelayCommand::Send {
            ticket,
            form: self.form.clone(),
            context: SenderContext::now(site),
        };
        if commands.send(command).is_err() {
            let error = SubmissionFailed::new(FailureReason::WorkerUnavailable);
            warn!(%error, "Could not queue contact message");
            self.status = SubmissionStatus::Failed(error.to_string());
            return false;
        }

        info!(ticket, "Contact message queued");
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::Sending;
        true
    }

    pub fn on_result(&mut self, result: RelayResult) {
        let ticket = match &result {
            RelayResult::Delivered { ticket } | RelayResult::Failed { ticket, .. } => *ticket,
        };
        if self.in_flight != Some(ticket) {
            return;
        }
        self.in_flight = None;

        match result {
            RelayResult::Delivered { .. } => {
                self.form.clear();
                self.status = SubmissionStatus::Sent;
            }
            RelayResult::Failed { error, .. } => {
                self.status = SubmissionStatus::Failed(error.to_string());
            }
        }
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

//! Contact form flow
//!
//! Submission runs through a small state machine:
//!
//! ```text
//! Idle -> Validating -> Rejected
//!                    -> Sending -> Succeeded
//!                               -> Failed
//! ```
//!
//! Every result phase falls back to `Idle` once its message expires. The
//! submit button is disabled with a busy label while sending and is
//! restored to its exact previous label afterwards, whatever the outcome.
//!
//! [`FormMachine`] holds the transitions and is free of timers and I/O.
//! [`submit_form`] and [`expire_message`] drive it against a
//! [`SubmissionTransport`] and the tokio clock.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields correctly.";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon!";
pub const FAILURE_MESSAGE: &str =
    "Oops! Something went wrong. Please try again or email me directly.";

/// Button markup shown while a send is in flight.
pub const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// Contents of the contact form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A single broken validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    NameTooShort,
    InvalidEmail,
    SubjectTooShort,
    MessageTooShort,
}

impl ValidationIssue {
    pub fn describe(&self) -> &'static str {
        match self {
            ValidationIssue::NameTooShort => "name must be at least 2 characters",
            ValidationIssue::InvalidEmail => "email address is not valid",
            ValidationIssue::SubjectTooShort => "subject must be at least 3 characters",
            ValidationIssue::MessageTooShort => "message must be at least 10 characters",
        }
    }
}

impl FormSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Every rule the submission breaks, in field order.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.name.trim().chars().count() < 2 {
            issues.push(ValidationIssue::NameTooShort);
        }
        if !EMAIL_RE.is_match(&self.email) {
            issues.push(ValidationIssue::InvalidEmail);
        }
        if self.subject.trim().chars().count() < 3 {
            issues.push(ValidationIssue::SubjectTooShort);
        }
        if self.message.trim().chars().count() < 10 {
            issues.push(ValidationIssue::MessageTooShort);
        }
        issues
    }

    pub fn validate(&self) -> FolioResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let detail = issues
            .iter()
            .map(ValidationIssue::describe)
            .collect::<Vec<_>>()
            .join(", ");
        Err(FolioError::Validation(detail))
    }

    /// JSON body a network transport would post.
    pub fn to_json(&self) -> FolioResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Sending,
    Succeeded,
    Failed,
}

impl FormPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Sending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// The form's result region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormMessage {
    pub text: String,
    pub kind: Option<MessageKind>,
    generation: u64,
}

impl FormMessage {
    pub fn is_visible(&self) -> bool {
        self.kind.is_some()
    }

    pub fn class(&self) -> String {
        match self.kind {
            Some(kind) => format!("form-message {}", kind.class()),
            None => "form-message".to_string(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    /// Inner markup, icons included.
    pub label: String,
    pub disabled: bool,
}

/// Result of feeding a submission to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A send is already in flight.
    Ignored,
    /// Validation failed; a message with this generation is showing.
    Rejected { generation: u64 },
    /// Validation passed; the caller must send and then call `complete`.
    Send,
}

#[derive(Debug, Clone)]
pub struct FormMachine {
    phase: FormPhase,
    button: SubmitButton,
    message: FormMessage,
    saved_label: Option<String>,
    next_generation: u64,
}

impl FormMachine {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            phase: FormPhase::Idle,
            button: SubmitButton {
                label: submit_label.into(),
                disabled: false,
            },
            message: FormMessage::default(),
            saved_label: None,
            next_generation: 1,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn message(&self) -> &FormMessage {
        &self.message
    }

    pub fn submit(&mut self, form: &FormSubmission) -> SubmitDecision {
        if self.phase.is_busy() {
            tracing::debug!("Submit ignored, a send is already in flight");
            return SubmitDecision::Ignored;
        }

        self.phase = FormPhase::Validating;
        if let Err(e) = form.validate() {
            tracing::debug!(error = %e, "Contact form rejected");
            self.phase = FormPhase::Rejected;
            let generation = self.show(MessageKind::Error, VALIDATION_MESSAGE);
            return SubmitDecision::Rejected { generation };
        }

        self.saved_label = Some(std::mem::replace(
            &mut self.button.label,
            BUSY_LABEL.to_string(),
        ));
        self.button.disabled = true;
        self.phase = FormPhase::Sending;
        SubmitDecision::Send
    }

    /// Record the send result. Returns the generation of the shown message.
    pub fn complete(&mut self, result: FolioResult<()>) -> u64 {
        if let Some(label) = self.saved_label.take() {
            self.button.label = label;
        }
        self.button.disabled = false;

        match result {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.phase = FormPhase::Succeeded;
                self.show(MessageKind::Success, SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::error!(error = %e, "Form submission error");
                self.phase = FormPhase::Failed;
                self.show(MessageKind::Error, FAILURE_MESSAGE)
            }
        }
    }

    fn show(&mut self, kind: MessageKind, text: &str) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.message = FormMessage {
            text: text.to_string(),
            kind: Some(kind),
            generation,
        };
        generation
    }

    /// Reset the message region if it still shows `generation`.
    ///
    /// Returns `false` when a newer message replaced it in the meantime.
    pub fn clear_message(&mut self, generation: u64) -> bool {
        if self.message.generation != generation || !self.message.is_visible() {
            return false;
        }
        self.message.kind = None;
        self.message.text.clear();
        if !self.phase.is_busy() {
            self.phase = FormPhase::Idle;
        }
        true
    }
}

/// Outbound delivery of a contact message.
pub trait SubmissionTransport {
    fn send(&self, submission: &FormSubmission) -> impl Future<Output = FolioResult<()>> + Send;
}

/// Stand-in transport that waits a fixed latency and reports success,
/// or the configured failure.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// A transport whose every send fails with `reason`.
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn send(&self, submission: &FormSubmission) -> impl Future<Output = FolioResult<()>> + Send {
        let latency = self.latency;
        let failure = self.failure.clone();
        let payload = submission.to_json();
        async move {
            let payload = payload?;
            tracing::debug!(bytes = payload.len(), ?latency, "Simulating contact send");
            tokio::time::sleep(latency).await;
            match failure {
                Some(reason) => Err(FolioError::Transport(reason)),
                None => Ok(()),
            }
        }
    }
}

/// Shared access to a [`FormMachine`] across await points.
pub trait FormHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormMachine) -> R) -> R;
}

impl FormHandle for Arc<Mutex<FormMachine>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut FormMachine) -> R) -> R {
        f(&mut self.lock())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Rejected { generation: u64 },
    Sent { generation: u64 },
    Failed { generation: u64 },
}

impl SubmitOutcome {
    /// Message generation to expire, if a message was shown.
    pub fn generation(&self) -> Option<u64> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Rejected { generation }
            | SubmitOutcome::Sent { generation }
            | SubmitOutcome::Failed { generation } => Some(*generation),
        }
    }

    /// Whether the form fields should be cleared.
    pub fn clears_fields(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

/// Validate, send, and record the result of one submission.
pub async fn submit_form<H, T>(handle: &mut H, transport: &T, form: &FormSubmission) -> SubmitOutcome
where
    H: FormHandle,
    T: SubmissionTransport,
{
    match handle.update(|m| m.submit(form)) {
        SubmitDecision::Ignored => SubmitOutcome::Ignored,
        SubmitDecision::Rejected { generation } => SubmitOutcome::Rejected { generation },
        SubmitDecision::Send => {
            let result = transport.send(form).await;
            let ok = result.is_ok();
            let generation = handle.update(|m| m.complete(result));
            if ok {
                SubmitOutcome::Sent { generation }
            } else {
                SubmitOutcome::Failed { generation }
            }
        }
    }
}

/// Wait out the message lifetime, then clear it unless it was replaced.
pub async fn expire_message<H: FormHandle>(handle: &mut H, generation: u64, ttl: Duration) -> bool {
    tokio::time::sleep(ttl).await;
    handle.update(|m| m.clear_message(generation))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

    fn valid() -> FormSubmission {
        FormSubmission::new("Al", "a@b.co", "Hi!", "1234567890")
    }

    #[test]
    fn minimal_valid_submission_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn short_name_fails() {
        let form = FormSubmission { name: "A".into(), ..valid() };
        assert_eq!(form.issues(), vec![ValidationIssue::NameTooShort]);
    }

    #[test]
    fn bad_email_fails() {
        let form = FormSubmission { email: "bad".into(), ..valid() };
        assert_eq!(form.issues(), vec![ValidationIssue::InvalidEmail]);
        for email in ["a@b", "a b@c.d", "@b.co", "a@@b.co", "a@b.co "] {
            let form = FormSubmission { email: email.into(), ..valid() };
            assert!(form.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let form = FormSubmission::new("  A  ", "a@b.co", " Hi ", "   123456789   ");
        assert_eq!(
            form.issues(),
            vec![
                ValidationIssue::NameTooShort,
                ValidationIssue::SubjectTooShort,
                ValidationIssue::MessageTooShort
            ]
        );
    }

    #[test]
    fn validation_error_lists_every_issue() {
        let err = FormSubmission::default().validate().unwrap_err();
        match err {
            FolioError::Validation(detail) => {
                assert!(detail.contains("name"));
                assert!(detail.contains("email"));
                assert!(detail.contains("subject"));
                assert!(detail.contains("message"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn payload_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&valid().to_json().unwrap()).unwrap();
        assert_eq!(json["name"], "Al");
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["subject"], "Hi!");
        assert_eq!(json["message"], "1234567890");
    }

    #[test]
    fn rejected_submission_leaves_button_alone() {
        let mut machine = FormMachine::new(LABEL);
        let decision = machine.submit(&FormSubmission::default());
        assert!(matches!(decision, SubmitDecision::Rejected { .. }));
        assert_eq!(machine.phase(), FormPhase::Rejected);
        assert_eq!(machine.button().label, LABEL);
        assert!(!machine.button().disabled);
        assert_eq!(machine.message().class(), "form-message error");
        assert_eq!(machine.message().text, VALIDATION_MESSAGE);
    }

    #[test]
    fn sending_disables_button_with_busy_label() {
        let mut machine = FormMachine::new(LABEL);
        assert_eq!(machine.submit(&valid()), SubmitDecision::Send);
        assert_eq!(machine.phase(), FormPhase::Sending);
        assert!(machine.button().disabled);
        assert_eq!(machine.button().label, BUSY_LABEL);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut machine = FormMachine::new(LABEL);
        machine.submit(&valid());
        assert_eq!(machine.submit(&valid()), SubmitDecision::Ignored);
        assert_eq!(machine.phase(), FormPhase::Sending);
    }

    #[test]
    fn button_restored_after_success_and_failure() {
        let mut machine = FormMachine::new(LABEL);
        let before = machine.button().clone();

        machine.submit(&valid());
        machine.complete(Ok(()));
        assert_eq!(machine.button(), &before);
        assert_eq!(machine.phase(), FormPhase::Succeeded);
        assert_eq!(machine.message().class(), "form-message success");

        machine.submit(&valid());
        machine.complete(Err(FolioError::Transport("offline".into())));
        assert_eq!(machine.button(), &before);
        assert_eq!(machine.phase(), FormPhase::Failed);
        assert_eq!(machine.message().text, FAILURE_MESSAGE);
    }

    #[test]
    fn stale_clear_does_not_hide_newer_message() {
        let mut machine = FormMachine::new(LABEL);
        let first = match machine.submit(&FormSubmission::default()) {
            SubmitDecision::Rejected { generation } => generation,
            other => panic!("unexpected decision: {other:?}"),
        };
        machine.submit(&valid());
        let second = machine.complete(Ok(()));
        assert_ne!(first, second);

        assert!(!machine.clear_message(first));
        assert!(machine.message().is_visible());
        assert!(machine.clear_message(second));
        assert!(!machine.message().is_visible());
        assert_eq!(machine.message().class(), "form-message");
        assert_eq!(machine.phase(), FormPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_transport_waits_latency() {
        let transport = SimulatedTransport::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        transport.send(&valid()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_transport_reports_transport_error() {
        let transport = SimulatedTransport::failing(Duration::from_millis(10), "boom");
        let err = transport.send(&valid()).await.unwrap_err();
        assert!(matches!(err, FolioError::Transport(reason) if reason == "boom"));
    }
}

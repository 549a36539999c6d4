#[cfg(feature = "ssr")]
pub mod mailer;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, MailerConfig};

/// How long a success or error banner stays up before the form goes idle.
pub const RESET_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl ContactStatus {
    /// Start a submission. Returns `None` while one is already in flight.
    pub fn submit(self) -> Option<Self> {
        match self {
            Self::Sending => None,
            Self::Idle | Self::Success | Self::Error => Some(Self::Sending),
        }
    }

    /// Land the outcome of the latest submission, whatever the current state.
    pub fn settle<T, E>(self, result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::Error,
        }
    }

    /// What a reset timer leaves behind. A submission still in flight is
    /// never dropped; everything else goes back to `Idle`.
    pub fn reset(self) -> Self {
        match self {
            Self::Sending => Self::Sending,
            Self::Idle | Self::Success | Self::Error => Self::Idle,
        }
    }

    /// Apply a send result to the status and the form fields.
    ///
    /// Success clears the fields, failure keeps them for another try.
    pub fn resolve<E>(self, form: ContactForm, result: &Result<(), E>) -> Resolution {
        let status = self.settle(result);
        let form = match result {
            Ok(()) => ContactForm::cleared(),
            Err(_) => form,
        };
        Resolution {
            status,
            form,
            arm_reset: status.is_terminal(),
        }
    }

    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }

    /// `Success` and `Error` are followed by a reset to `Idle` after
    /// [`RESET_AFTER`].
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Message sent successfully! I'll get back to you soon."),
            Self::Error => {
                Some("Failed to send message. Please try again or contact me directly.")
            }
            Self::Idle | Self::Sending => None,
        }
    }
}

/// Next state of the form after a send result arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: ContactStatus,
    pub form: ContactForm,
    /// Start a [`RESET_AFTER`] timer that calls [`ContactStatus::reset`].
    pub arm_reset: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not reach mail service: {0}")]
    Transport(String),
    #[error("mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    pub fn cleared() -> Self {
        Self::default()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

/// JSON body accepted by the EmailJS send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(config: &MailerConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                subject: form.subject.trim().to_string(),
                message: form.message.clone(),
                to_name: config.recipient_name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Discussion".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn full_success_cycle() {
        let status = ContactStatus::Idle.submit().unwrap();
        assert!(status.is_sending());
        let status = status.settle(&Ok::<(), ()>(()));
        assert_eq!(status, ContactStatus::Success);
        assert!(status.is_terminal());
        assert!(status.banner().unwrap().starts_with("Message sent"));
    }

    #[test]
    fn failure_lands_in_error() {
        let status = ContactStatus::Idle
            .submit()
            .unwrap()
            .settle(&Err::<(), _>("boom"));
        assert_eq!(status, ContactStatus::Error);
        assert!(status.banner().unwrap().starts_with("Failed"));
    }

    #[test]
    fn cannot_submit_while_sending() {
        assert_eq!(ContactStatus::Sending.submit(), None);
    }

    #[test]
    fn can_resubmit_from_terminal_states() {
        assert_eq!(
            ContactStatus::Success.submit(),
            Some(ContactStatus::Sending)
        );
        assert_eq!(ContactStatus::Error.submit(), Some(ContactStatus::Sending));
    }

    #[test]
    fn settle_always_lands_latest_result() {
        for status in [
            ContactStatus::Idle,
            ContactStatus::Sending,
            ContactStatus::Success,
            ContactStatus::Error,
        ] {
            assert_eq!(status.settle(&Ok::<(), ()>(())), ContactStatus::Success);
            assert_eq!(status.settle(&Err::<(), ()>(())), ContactStatus::Error);
        }
    }

    #[test]
    fn reset_keeps_submission_in_flight() {
        assert_eq!(ContactStatus::Sending.reset(), ContactStatus::Sending);
        assert_eq!(ContactStatus::Success.reset(), ContactStatus::Idle);
        assert_eq!(ContactStatus::Error.reset(), ContactStatus::Idle);
        assert_eq!(ContactStatus::Idle.reset(), ContactStatus::Idle);
    }

    #[test]
    fn success_clears_fields_and_arms_reset() {
        let sending = ContactStatus::Idle.submit().unwrap();
        let next = sending.resolve(filled(), &Ok::<(), ()>(()));
        assert_eq!(next.status, ContactStatus::Success);
        assert!(next.form.is_empty());
        assert!(next.arm_reset);
        assert_eq!(next.status.reset(), ContactStatus::Idle);
    }

    #[test]
    fn error_keeps_fields_and_arms_reset() {
        let sending = ContactStatus::Idle.submit().unwrap();
        let next = sending.resolve(filled(), &Err::<(), _>("boom"));
        assert_eq!(next.status, ContactStatus::Error);
        assert_eq!(next.form, filled());
        assert!(next.arm_reset);
        assert_eq!(next.status.reset(), ContactStatus::Idle);
    }

    #[test]
    fn earlier_reset_timer_does_not_swallow_resubmission() {
        // first send succeeds and arms a timer
        let first = ContactStatus::Idle
            .submit()
            .unwrap()
            .resolve(filled(), &Ok::<(), ()>(()));
        assert!(first.arm_reset);

        // resubmitted before that timer fires
        let status = first.status.submit().unwrap();
        let status = status.reset();
        assert_eq!(status, ContactStatus::Sending);
        assert_eq!(status.submit(), None);

        let ok = status.resolve(filled(), &Ok::<(), ()>(()));
        assert_eq!(ok.status, ContactStatus::Success);
        assert!(ok.form.is_empty());

        let err = status.resolve(filled(), &Err::<(), _>("boom"));
        assert_eq!(err.status, ContactStatus::Error);
        assert_eq!(err.form, filled());
    }

    #[test]
    fn idle_and_sending_have_no_banner() {
        assert_eq!(ContactStatus::Idle.banner(), None);
        assert_eq!(ContactStatus::Sending.banner(), None);
        assert!(!ContactStatus::Idle.is_terminal());
        assert!(!ContactStatus::Sending.is_terminal());
    }

    #[test]
    fn reset_delay_is_five_seconds() {
        assert_eq!(RESET_AFTER, Duration::from_secs(5));
    }

    #[test]
    fn validate_accepts_complete_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_blank_fields_in_order() {
        let form = ContactForm {
            name: " ".to_string(),
            subject: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

        let form = ContactForm {
            message: "\n\t".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn validate_rejects_bad_emails() {
        for email in ["jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c"] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn cleared_form_is_empty() {
        assert!(ContactForm::cleared().is_empty());
        assert!(!filled().is_empty());
    }

    #[test]
    fn email_request_matches_relay_schema() {
        let config = MailerConfig {
            endpoint: "unused".to_string(),
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "public_1".to_string(),
            recipient_name: "Mahesh Sharma".to_string(),
        };
        let form = ContactForm {
            name: "  Jane Doe ".to_string(),
            ..filled()
        };
        let body = serde_json::to_value(EmailRequest::new(&config, &form)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "public_1",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_email": "jane@example.com",
                    "subject": "Project Discussion",
                    "message": "Hello there",
                    "to_name": "Mahesh Sharma",
                }
            })
        );
    }

    #[test]
    fn config_errors_convert() {
        let err: ContactError = ConfigError::Missing("EMAILJS_PUBLIC_KEY").into();
        assert_eq!(
            err.to_string(),
            "missing environment variable EMAILJS_PUBLIC_KEY"
        );
    }
}

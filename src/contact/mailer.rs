use std::future::Future;
use std::sync::LazyLock;

use reqwest::Client;

use super::{ContactError, ContactForm, EmailRequest};
use crate::config::{ConfigError, MailerConfig};

/// Mailer built from the environment on first use.
pub static GLOBAL_MAILER: LazyLock<Result<EmailJsMailer, ConfigError>> =
    LazyLock::new(|| MailerConfig::from_env().map(EmailJsMailer::new));

pub trait Mailer {
    fn send(&self, form: &ContactForm) -> impl Future<Output = Result<(), ContactError>> + Send;
}

/// Delivers contact messages through the EmailJS REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: Client,
    config: MailerConfig,
}

impl EmailJsMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &MailerConfig {
        &self.config
    }
}

impl Mailer for EmailJsMailer {
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        let body = EmailRequest::new(&self.config, form);
        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ContactError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

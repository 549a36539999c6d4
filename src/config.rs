use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_RECIPIENT: &str = "Mahesh Sharma";

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_ENDPOINT: &str = "EMAILJS_ENDPOINT";
pub const ENV_RECIPIENT: &str = "CONTACT_RECIPIENT_NAME";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Credentials for the third-party mail relay behind the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

impl MailerConfig {
    /// Build the config from any key/value source. Blank values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: required(ENV_SERVICE_ID)?,
            template_id: required(ENV_TEMPLATE_ID)?,
            public_key: required(ENV_PUBLIC_KEY)?,
            endpoint: get(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            recipient_name: get(ENV_RECIPIENT).unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn fills_defaults_for_optional_keys() {
        let config = MailerConfig::from_lookup(lookup(&[
            (ENV_SERVICE_ID, "service_abc"),
            (ENV_TEMPLATE_ID, "template_xyz"),
            (ENV_PUBLIC_KEY, "pk_123"),
        ]))
        .unwrap();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.recipient_name, DEFAULT_RECIPIENT);
    }

    #[test]
    fn overrides_optional_keys() {
        let config = MailerConfig::from_lookup(lookup(&[
            (ENV_SERVICE_ID, "s"),
            (ENV_TEMPLATE_ID, "t"),
            (ENV_PUBLIC_KEY, "k"),
            (ENV_ENDPOINT, "http://localhost:9999/send"),
            (ENV_RECIPIENT, "Someone Else"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:9999/send");
        assert_eq!(config.recipient_name, "Someone Else");
    }

    #[test]
    fn reports_first_missing_key() {
        let err = MailerConfig::from_lookup(lookup(&[(ENV_SERVICE_ID, "s")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_TEMPLATE_ID));
        assert_eq!(
            err.to_string(),
            "missing environment variable EMAILJS_TEMPLATE_ID"
        );
    }

    #[test]
    fn blank_values_are_missing() {
        let err = MailerConfig::from_lookup(lookup(&[
            (ENV_SERVICE_ID, "   "),
            (ENV_TEMPLATE_ID, "t"),
            (ENV_PUBLIC_KEY, "k"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_SERVICE_ID));
    }
}

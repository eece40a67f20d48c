use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    /// Sender mailbox, e.g. `Contact Form <no-reply@example.com>`.
    pub from: String,
    /// Inbox that receives every submission.
    pub recipient: String,
    #[serde(default)]
    pub starttls: bool,
}

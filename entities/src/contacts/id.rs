use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

const CONTACT_ID_LENGTH: usize = 24;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid contact ID format")]
pub struct InvalidContactId;

/// Store identifier of a contact: 24 hex characters, a 4 byte timestamp followed
/// by 8 random bytes.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    pub fn generate() -> Self {
        let seconds = Utc::now().timestamp() as u32;
        let random = Uuid::new_v4();
        let tail: String = random.as_bytes()[..8]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        ContactId(format!("{seconds:08x}{tail}"))
    }

    pub fn parse(value: &str) -> Result<Self, InvalidContactId> {
        let is_valid = value.len() == CONTACT_ID_LENGTH
            && value.chars().all(|character| character.is_ascii_hexdigit());
        if !is_valid {
            return Err(InvalidContactId);
        }
        Ok(ContactId(value.to_ascii_lowercase()))
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = InvalidContactId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactId::parse(&value)
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

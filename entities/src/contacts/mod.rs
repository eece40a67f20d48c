mod details;
mod id;

pub use details::{ContactEmail, ContactName};
pub use id::{ContactId, InvalidContactId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that belong to the store and are never taken from a submission.
const RESERVED_KEYS: [&str; 4] = ["id", "_id", "name", "created_at"];

/// A validated submission, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: ContactName,
    pub details: Map<String, Value>,
}

impl NewContact {
    pub fn email(&self) -> Option<&str> {
        self.details.get("email").and_then(Value::as_str)
    }
}

impl TryFrom<Value> for NewContact {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err("Contact submission must be a JSON object".to_string());
        };

        let name = match fields.remove("name") {
            Some(Value::String(name)) => ContactName::try_from(name)?,
            Some(_) => return Err("Contact name must be a string".to_string()),
            None => return Err("Contact name is required".to_string()),
        };

        match fields.get("email") {
            None | Some(Value::Null) => {}
            Some(Value::String(email)) => {
                ContactEmail::try_from(email.clone())?;
            }
            Some(_) => return Err("Contact email must be a string".to_string()),
        }

        fields.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Ok(NewContact {
            name,
            details: fields,
        })
    }
}

/// A persisted form submission. Everything besides identity, name and creation
/// time is kept as submitted in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(id: ContactId, contact: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: contact.name.into(),
            details: contact.details,
            created_at,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.details.get("email").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.details.get("message").and_then(Value::as_str)
    }
}

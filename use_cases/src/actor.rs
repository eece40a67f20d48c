use anyhow::anyhow;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Deserialize)]
pub enum Permission {
    #[serde(rename = "read:contacts")]
    ReadContacts,
    #[serde(rename = "admin")]
    Admin,
}

#[derive(Debug, Default)]
pub struct Permissions {
    permissions: HashSet<Permission>,
}

impl Permissions {
    fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&Permission::Admin) || self.permissions.contains(&permission)
    }
}

impl From<&[String]> for Permissions {
    fn from(value: &[String]) -> Self {
        let permissions = value
            .iter()
            .filter_map(|permission| {
                serde_json::from_value::<Permission>(serde_json::Value::String(permission.clone()))
                    .ok()
            })
            .collect();
        Self { permissions }
    }
}

/// Whoever is behind an authenticated request.
pub trait Actor: Send + Sync {
    fn permissions(&self) -> Permissions;

    fn subject(&self) -> String;

    fn check_for_permission(&self, permission: Permission) -> anyhow::Result<()> {
        match self.permissions().contains(permission) {
            true => Ok(()),
            false => Err(anyhow!("Unauthorized")),
        }
    }
}

#[cfg(test)]
pub(crate) struct TestActor(pub Vec<String>);

#[cfg(test)]
impl TestActor {
    pub(crate) fn with(permissions: &[&str]) -> Self {
        TestActor(permissions.iter().map(|p| p.to_string()).collect())
    }
}

#[cfg(test)]
impl Actor for TestActor {
    fn permissions(&self) -> Permissions {
        Permissions::from(&self.0[..])
    }

    fn subject(&self) -> String {
        "auth|test_actor".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Actor, Permission, TestActor};

    #[test]
    fn test_that_unknown_permissions_are_ignored() {
        let actor = TestActor::with(&["write:contacts", "read:contacts"]);
        assert!(actor.check_for_permission(Permission::ReadContacts).is_ok());
    }

    #[test]
    fn test_that_admin_has_every_permission() {
        let actor = TestActor::with(&["admin"]);
        assert!(actor.check_for_permission(Permission::ReadContacts).is_ok());
    }

    #[test]
    fn test_that_missing_permission_is_rejected() {
        let actor = TestActor::with(&["read:reports"]);
        assert!(actor.check_for_permission(Permission::ReadContacts).is_err());
    }
}

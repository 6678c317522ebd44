//! Per-screen permissions of the signed-in user

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known permission keys
pub struct PermissionKey;

impl PermissionKey {
    pub const EXPENSE_TYPE: &'static str = "expense_configuration_expense_type";
}

/// Capabilities on one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubPermission {
    #[serde(default)]
    pub add: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub delete: bool,
}

/// Permission object handed to every configuration tab.
///
/// A missing entry means "no access": every helper fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPermission {
    #[serde(default)]
    pub sub: BTreeMap<String, SubPermission>,
}

impl UserPermission {
    pub fn get(&self, key: &str) -> Option<&SubPermission> {
        self.sub.get(key)
    }

    pub fn grant(&mut self, key: impl Into<String>, permission: SubPermission) {
        self.sub.insert(key.into(), permission);
    }

    pub fn can_add(&self, key: &str) -> bool {
        self.get(key).map(|p| p.add).unwrap_or(false)
    }

    pub fn can_edit(&self, key: &str) -> bool {
        self.get(key).map(|p| p.edit).unwrap_or(false)
    }

    pub fn can_view(&self, key: &str) -> bool {
        self.get(key).map(|p| p.view).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_denies_everything() {
        let permissions = UserPermission::default();
        assert!(!permissions.can_add(PermissionKey::EXPENSE_TYPE));
        assert!(!permissions.can_edit(PermissionKey::EXPENSE_TYPE));
        assert!(!permissions.can_view(PermissionKey::EXPENSE_TYPE));
    }

    #[test]
    fn flags_are_independent() {
        let mut permissions = UserPermission::default();
        permissions.grant(
            PermissionKey::EXPENSE_TYPE,
            SubPermission {
                add: false,
                edit: true,
                view: false,
                delete: false,
            },
        );
        assert!(!permissions.can_add(PermissionKey::EXPENSE_TYPE));
        assert!(permissions.can_edit(PermissionKey::EXPENSE_TYPE));
        assert!(!permissions.can_view(PermissionKey::EXPENSE_TYPE));
        assert!(!permissions.can_edit("other_screen"));
    }

    #[test]
    fn omitted_flags_deserialize_as_denied() {
        let permissions: UserPermission = serde_json::from_str(
            r#"{"sub":{"expense_configuration_expense_type":{"view":true}}}"#,
        )
        .unwrap();
        let p = permissions.get(PermissionKey::EXPENSE_TYPE).unwrap();
        assert!(p.view);
        assert!(!p.add && !p.edit && !p.delete);
    }
}

use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub Uuid);

impl IconId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for IconId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IconId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Catalog entry
// ============================================================================

/// Icon of the shared catalog. `path` is relative to the public asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub id: IconId,
    pub name: String,
    pub path: String,
}

impl Icon {
    pub fn new_for_insert(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: IconId::new_v4(),
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn to_option(&self, selected: bool) -> IconOption {
        IconOption {
            id: self.id,
            name: self.name.clone(),
            path: self.path.clone(),
            selected,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Selectable catalog entry as used by forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconOption {
    pub id: IconId,
    pub name: String,
    pub path: String,
    /// Accepts `true/false`, `0/1` and `"0"/"1"`; always written as a bool
    #[serde(default, deserialize_with = "deserialize_selected")]
    pub selected: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectedFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn deserialize_selected<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<SelectedFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(SelectedFlag::Bool(b)) => Ok(b),
        Some(SelectedFlag::Int(n)) => Ok(n == 1),
        Some(SelectedFlag::Text(s)) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid selected flag: {:?}",
                other
            ))),
        },
    }
}

/// Keeps only the options the user has switched on
pub fn selected_icons(icons: &[IconOption]) -> Vec<IconOption> {
    icons.iter().filter(|icon| icon.selected).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(selected: &str) -> Result<IconOption, serde_json::Error> {
        serde_json::from_str(&format!(
            r#"{{"id":"6f0d4c57-8c8a-4d0e-9d7e-3f4b8f5a8d11","name":"Fuel","path":"icons/fuel.svg","selected":{}}}"#,
            selected
        ))
    }

    #[test]
    fn selected_flag_accepts_bool_and_numeric_forms() {
        assert!(parse("true").unwrap().selected);
        assert!(parse("1").unwrap().selected);
        assert!(parse(r#""1""#).unwrap().selected);
        assert!(!parse("false").unwrap().selected);
        assert!(!parse("0").unwrap().selected);
        assert!(!parse(r#""0""#).unwrap().selected);
        assert!(!parse("null").unwrap().selected);
        assert!(!parse("2").unwrap().selected);
        assert!(parse(r#""yes""#).is_err());
    }

    #[test]
    fn missing_selected_defaults_to_false() {
        let option: IconOption = serde_json::from_str(
            r#"{"id":"6f0d4c57-8c8a-4d0e-9d7e-3f4b8f5a8d11","name":"Fuel","path":"icons/fuel.svg"}"#,
        )
        .unwrap();
        assert!(!option.selected);
    }

    #[test]
    fn selected_is_written_as_bool() {
        let option = Icon::new_for_insert("Fuel", "icons/fuel.svg").to_option(true);
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["selected"], serde_json::Value::Bool(true));
    }

    #[test]
    fn selected_icons_filters_switched_on_entries() {
        let fuel = Icon::new_for_insert("Fuel", "icons/fuel.svg");
        let food = Icon::new_for_insert("Food", "icons/food.svg");
        let picked = selected_icons(&[fuel.to_option(false), food.to_option(true)]);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, food.id);
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::a002_icon::aggregate::{selected_icons, IconId, IconOption};
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::language::Language;
use crate::shared::validation::{ValidationIssue, ValidationRules};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an expense type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseTypeId(pub Uuid);

impl ExpenseTypeId {
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

impl AggregateId for ExpenseTypeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ExpenseTypeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Localized names
// ============================================================================

/// The three parallel names of a record. There is no canonical name:
/// the list shows the one matching the reader's language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseTypeNames {
    pub english: String,
    pub farsi: String,
    pub pashto: String,
}

impl ExpenseTypeNames {
    pub const FIELDS: [&'static str; 3] = ["english", "farsi", "pashto"];

    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "english" => Some(&self.english),
            "farsi" => Some(&self.farsi),
            "pashto" => Some(&self.pashto),
            _ => None,
        }
    }

    /// Replaces one name by field name; unknown fields are ignored
    pub fn set(&mut self, field: &str, value: String) -> bool {
        match field {
            "english" => self.english = value,
            "farsi" => self.farsi = value,
            "pashto" => self.pashto = value,
            _ => return false,
        }
        true
    }

    /// Display name for `lang`, falling back to English when that translation is blank
    pub fn name_for(&self, lang: Language) -> &str {
        let localized = match lang {
            Language::English => &self.english,
            Language::Farsi => &self.farsi,
            Language::Pashto => &self.pashto,
        };
        if localized.trim().is_empty() {
            &self.english
        } else {
            localized
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            english: self.english.trim().to_string(),
            farsi: self.farsi.trim().to_string(),
            pashto: self.pashto.trim().to_string(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Expense type as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseType {
    pub id: ExpenseTypeId,
    #[serde(flatten)]
    pub names: ExpenseTypeNames,
    pub icon_ids: Vec<IconId>,
    pub metadata: EntityMetadata,
}

impl ExpenseType {
    pub fn new_for_insert(dto: &ExpenseTypeDto) -> Self {
        Self {
            id: ExpenseTypeId::new_v4(),
            names: dto.names.trimmed(),
            icon_ids: dto.selected_icon_ids(),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &ExpenseTypeDto) {
        self.names = dto.names.trimmed();
        self.icon_ids = dto.selected_icon_ids();
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }

    pub fn to_simple_item(&self, lang: Language) -> SimpleItem {
        SimpleItem {
            id: self.to_string_id(),
            name: self.names.name_for(lang).to_string(),
            created_at: self.metadata.created_at,
        }
    }

    /// Detail view: the whole catalog, with this record's icons switched on
    pub fn to_detail(&self, catalog: &[IconOption]) -> ExpenseTypeDetail {
        ExpenseTypeDetail {
            id: self.to_string_id(),
            names: self.names.clone(),
            icons: catalog
                .iter()
                .map(|icon| IconOption {
                    selected: self.icon_ids.contains(&icon.id),
                    ..icon.clone()
                })
                .collect(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// List row: id, display name for the request language, creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleItem {
    pub id: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Editable record as returned by `GET /api/expense-types/:id`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseTypeDetail {
    pub id: String,
    #[serde(flatten)]
    pub names: ExpenseTypeNames,
    #[serde(default)]
    pub icons: Vec<IconOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTypeDetailResponse {
    pub expense_type: ExpenseTypeDetail,
}

/// Create/update payload. `id` is set only when updating.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseTypeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub names: ExpenseTypeNames,
    #[serde(default)]
    pub icons: Vec<IconOption>,
}

impl ExpenseTypeDto {
    pub fn selected_icon_ids(&self) -> Vec<IconId> {
        let mut seen = HashSet::new();
        selected_icons(&self.icons)
            .into_iter()
            .map(|icon| icon.id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Required names plus at least one selected icon.
    ///
    /// Returns the failed rules in field order; empty means valid.
    pub fn validate(&self) -> Vec<(&'static str, ValidationIssue)> {
        let rules = ValidationRules::required();
        let mut issues = Vec::new();
        for field in ExpenseTypeNames::FIELDS {
            let value = self.names.get(field).unwrap_or_default();
            if let Some(issue) = rules.check(value) {
                issues.push((field, issue));
            }
        }
        if self.selected_icon_ids().is_empty() {
            issues.push(("icons", ValidationIssue::NoneSelected));
        }
        issues
    }
}

/// Response of a successful create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTypeSaveResponse {
    pub message: String,
    pub expense_type: SimpleItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_icon::aggregate::Icon;

    fn names(english: &str, farsi: &str, pashto: &str) -> ExpenseTypeNames {
        ExpenseTypeNames {
            english: english.into(),
            farsi: farsi.into(),
            pashto: pashto.into(),
        }
    }

    #[test]
    fn name_for_falls_back_to_english() {
        let n = names("Fuel", "سوخت", "");
        assert_eq!(n.name_for(Language::Farsi), "سوخت");
        assert_eq!(n.name_for(Language::Pashto), "Fuel");
        assert_eq!(n.name_for(Language::English), "Fuel");
    }

    #[test]
    fn set_replaces_only_named_field() {
        let mut n = names("Fuel", "سوخت", "تیل");
        assert!(n.set("pashto", "سون".into()));
        assert!(!n.set("german", "Kraftstoff".into()));
        assert_eq!(n, names("Fuel", "سوخت", "سون"));
    }

    #[test]
    fn validate_reports_each_empty_name() {
        let icon = Icon::new_for_insert("Fuel", "icons/fuel.svg");
        let dto = ExpenseTypeDto {
            id: None,
            names: names("Fuel", " ", ""),
            icons: vec![icon.to_option(true)],
        };
        assert_eq!(
            dto.validate(),
            vec![
                ("farsi", ValidationIssue::Required),
                ("pashto", ValidationIssue::Required)
            ]
        );
    }

    #[test]
    fn validate_requires_a_selected_icon_even_with_names() {
        let icon = Icon::new_for_insert("Fuel", "icons/fuel.svg");
        let dto = ExpenseTypeDto {
            id: None,
            names: names("Fuel", "سوخت", "تیل"),
            icons: vec![icon.to_option(false)],
        };
        assert_eq!(dto.validate(), vec![("icons", ValidationIssue::NoneSelected)]);
    }

    #[test]
    fn dto_wire_shape_is_flat() {
        let icon = Icon::new_for_insert("Fuel", "icons/fuel.svg");
        let dto = ExpenseTypeDto {
            id: None,
            names: names("Fuel", "سوخت", "تیل"),
            icons: vec![icon.to_option(true)],
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["english"], "Fuel");
        assert_eq!(json["pashto"], "تیل");
        assert_eq!(json["icons"][0]["selected"], true);
    }

    #[test]
    fn detail_marks_associated_icons() {
        let fuel = Icon::new_for_insert("Fuel", "icons/fuel.svg");
        let food = Icon::new_for_insert("Food", "icons/food.svg");
        let dto = ExpenseTypeDto {
            id: None,
            names: names(" Fuel ", "سوخت", "تیل"),
            icons: vec![food.to_option(true)],
        };
        let aggregate = ExpenseType::new_for_insert(&dto);
        assert_eq!(aggregate.names.english, "Fuel");

        let detail = aggregate.to_detail(&[fuel.to_option(false), food.to_option(false)]);
        assert_eq!(detail.icons.len(), 2);
        assert!(!detail.icons[0].selected);
        assert!(detail.icons[1].selected);
    }
}

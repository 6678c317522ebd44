use contracts::domain::a001_expense_type::aggregate::{
    ExpenseTypeDetail, ExpenseTypeDto, ExpenseTypeNames,
};
use contracts::domain::a002_icon::aggregate::{selected_icons, IconId, IconOption};
use contracts::shared::validation::{FormErrors, ValidationIssue};

/// Local state of the create/edit dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseTypeForm {
    pub id: Option<String>,
    pub names: ExpenseTypeNames,
    pub icons: Vec<IconOption>,
    pub errors: FormErrors,
}

/// Why a submit was blocked before any request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blocked {
    pub icons_missing: bool,
}

impl ExpenseTypeForm {
    pub fn from_detail(detail: ExpenseTypeDetail) -> Self {
        Self {
            id: Some(detail.id),
            names: detail.names,
            icons: detail.icons,
            errors: FormErrors::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces one name field; editing it clears its error
    pub fn set_field(&mut self, field: &str, value: String) {
        if self.names.set(field, value) {
            self.errors.remove(field);
        }
    }

    /// Sets `selected` on the icon with `id`; every other icon is untouched
    pub fn toggle_icon(&mut self, id: IconId, selected: bool) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            icon.selected = selected;
        }
        if selected {
            self.errors.remove("icons");
        }
    }

    pub fn selected(&self) -> Vec<IconOption> {
        selected_icons(&self.icons)
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    /// Runs the form rules and, when they pass, builds the payload.
    ///
    /// Field errors are replaced with the outcome, worded by `message`.
    pub fn validate<F>(&mut self, message: F) -> Result<ExpenseTypeDto, Blocked>
    where
        F: FnMut(&str, ValidationIssue) -> String,
    {
        let dto = ExpenseTypeDto {
            id: self.id.clone(),
            names: self.names.clone(),
            icons: self.selected(),
        };
        let issues = dto.validate();
        self.errors = FormErrors::from_issues(&issues, message);

        if issues.is_empty() {
            Ok(dto)
        } else {
            Err(Blocked {
                icons_missing: self.errors.contains("icons"),
            })
        }
    }

    /// Adds field errors reported by the server
    pub fn merge_server_errors(&mut self, errors: FormErrors) {
        self.errors.merge(errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str, selected: bool) -> IconOption {
        IconOption {
            id: IconId::new_v4(),
            name: name.to_string(),
            path: format!("icons/{}.svg", name.to_lowercase()),
            selected,
        }
    }

    fn form() -> ExpenseTypeForm {
        ExpenseTypeForm {
            icons: vec![icon("Fuel", false), icon("Food", false), icon("Rent", false)],
            ..Default::default()
        }
    }

    fn key_only(_field: &str, issue: ValidationIssue) -> String {
        issue.key().to_string()
    }

    fn fill_names(form: &mut ExpenseTypeForm) {
        form.set_field("english", "Fuel".into());
        form.set_field("farsi", "سوخت".into());
        form.set_field("pashto", "تیل".into());
    }

    #[test]
    fn set_field_replaces_only_that_name() {
        let mut f = form();
        f.set_field("farsi", "سوخت".into());
        assert_eq!(f.names.farsi, "سوخت");
        assert!(f.names.english.is_empty());
        f.set_field("unknown", "x".into());
        assert!(f.names.pashto.is_empty());
    }

    #[test]
    fn toggle_icon_touches_only_matching_id() {
        let mut f = form();
        let target = f.icons[1].id;
        f.toggle_icon(target, true);
        let flags: Vec<bool> = f.icons.iter().map(|i| i.selected).collect();
        assert_eq!(flags, vec![false, true, false]);
        f.toggle_icon(target, false);
        assert!(f.selected().is_empty());
    }

    #[test]
    fn missing_name_blocks_submit_and_reports_field() {
        let mut f = form();
        fill_names(&mut f);
        f.set_field("pashto", "   ".into());
        let first = f.icons[0].id;
        f.toggle_icon(first, true);

        let blocked = f.validate(key_only).unwrap_err();
        assert!(!blocked.icons_missing);
        assert_eq!(f.error("pashto").as_deref(), Some("required"));
        assert!(f.error("english").is_none());
    }

    #[test]
    fn no_icon_blocks_submit_even_with_names() {
        let mut f = form();
        fill_names(&mut f);
        let blocked = f.validate(key_only).unwrap_err();
        assert!(blocked.icons_missing);
        assert_eq!(f.error("icons").as_deref(), Some("atleast_one_ico"));
    }

    #[test]
    fn valid_form_builds_payload_with_selected_icons_only() {
        let mut f = form();
        fill_names(&mut f);
        let picked = f.icons[2].id;
        f.toggle_icon(picked, true);

        let dto = f.validate(key_only).unwrap();
        assert!(dto.id.is_none());
        assert_eq!(dto.names.english, "Fuel");
        assert_eq!(dto.icons.len(), 1);
        assert_eq!(dto.icons[0].id, picked);
        assert!(f.errors.is_empty());
    }

    #[test]
    fn edit_form_keeps_id_in_payload() {
        let detail = ExpenseTypeDetail {
            id: "a1b2".to_string(),
            names: ExpenseTypeNames {
                english: "Rent".into(),
                farsi: "کرایه".into(),
                pashto: "کرایه".into(),
            },
            icons: vec![icon("Rent", true), icon("Food", false)],
        };
        let mut f = ExpenseTypeForm::from_detail(detail);
        assert!(f.is_edit());
        let dto = f.validate(key_only).unwrap();
        assert_eq!(dto.id.as_deref(), Some("a1b2"));
        assert_eq!(dto.icons.len(), 1);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut f = form();
        let _ = f.validate(key_only);
        assert!(f.errors.contains("english"));
        f.set_field("english", "Fuel".into());
        assert!(!f.errors.contains("english"));
        assert!(f.errors.contains("farsi"));
    }

    #[test]
    fn server_errors_are_merged() {
        let mut f = form();
        let mut server = FormErrors::new();
        server.insert("icons", "The selected icons contain an unknown entry.");
        f.merge_server_errors(server);
        assert_eq!(
            f.error("icons").as_deref(),
            Some("The selected icons contain an unknown entry.")
        );
    }
}

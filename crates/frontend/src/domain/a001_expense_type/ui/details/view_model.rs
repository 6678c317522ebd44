use super::form::ExpenseTypeForm;
use crate::domain::a001_expense_type::api;
use crate::shared::i18n::tr;
use crate::shared::toast::ToastService;
use contracts::domain::a001_expense_type::aggregate::SimpleItem;
use contracts::domain::a002_icon::aggregate::IconId;
use contracts::shared::language::Language;
use contracts::shared::validation::ValidationIssue;
use leptos::prelude::*;

/// ViewModel for the expense type dialog
#[derive(Clone)]
pub struct ExpenseTypeDetailsVm {
    pub form: RwSignal<ExpenseTypeForm>,
    /// Submit in flight
    pub loading: RwSignal<bool>,
    /// Detail or catalog request in flight
    pub fetching: RwSignal<bool>,
    existing: Option<SimpleItem>,
}

/// Wording of a failed rule in the UI language
fn issue_message(lang: Language, field: &str, issue: ValidationIssue) -> String {
    match issue {
        ValidationIssue::Required => tr(lang, "required"),
        ValidationIssue::NoneSelected => tr(lang, "atleast_one_ico"),
        ValidationIssue::UnknownReference => issue.default_message(field),
    }
}

impl ExpenseTypeDetailsVm {
    pub fn new(existing: Option<SimpleItem>) -> Self {
        Self {
            form: RwSignal::new(ExpenseTypeForm::default()),
            loading: RwSignal::new(false),
            fetching: RwSignal::new(false),
            existing,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    /// Edit mode loads the record, create mode only the icon catalog
    pub fn load(&self, lang: Language) {
        let form = self.form;
        let fetching = self.fetching;
        let existing_id = self.existing.as_ref().map(|e| e.id.clone());

        fetching.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match existing_id {
                Some(id) => match api::fetch_detail(&id, lang).await {
                    Ok(detail) => form.set(ExpenseTypeForm::from_detail(detail)),
                    Err(e) => log::error!("Failed to load expense type {}: {}", id, e),
                },
                None => match api::fetch_icons(lang).await {
                    Ok(icons) => form.update(|f| f.icons = icons),
                    Err(e) => log::error!("Failed to load icon catalog: {}", e),
                },
            }
            fetching.set(false);
        });
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn toggle_icon(&self, id: IconId, selected: bool) {
        self.form.update(|f| f.toggle_icon(id, selected));
    }

    /// Validates, submits and reports `(record, edited)` through `on_complete`.
    ///
    /// `on_saved` runs after a successful save (the dialog closes itself there).
    pub fn save_command(
        &self,
        lang: Language,
        toast: ToastService,
        on_complete: Callback<(SimpleItem, bool)>,
        on_saved: impl Fn() + 'static,
    ) {
        if self.loading.get_untracked() {
            return;
        }

        let mut outcome = None;
        self.form.update(|f| {
            outcome = Some(f.validate(|field, issue| issue_message(lang, field, issue)));
        });
        let dto = match outcome {
            Some(Ok(dto)) => dto,
            Some(Err(blocked)) => {
                if blocked.icons_missing {
                    toast.error(tr(lang, "atleast_one_ico"));
                }
                return;
            }
            None => return,
        };

        let edited = self.is_edit();
        let form = self.form;
        let loading = self.loading;
        loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&dto, lang).await {
                Ok(response) => {
                    let text = if response.message.trim().is_empty() {
                        tr(lang, "saved")
                    } else {
                        response.message
                    };
                    toast.success(text);
                    loading.set(false);
                    on_complete.run((response.expense_type, edited));
                    on_saved();
                }
                Err(e) => {
                    log::error!("Failed to save expense type: {}", e);
                    let text = e
                        .display_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| tr(lang, "request_failed"));
                    if let Some(errors) = e.errors {
                        form.update(|f| f.merge_server_errors(errors));
                    }
                    toast.error(text);
                    loading.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_messages_follow_language() {
        assert_eq!(
            issue_message(Language::English, "farsi", ValidationIssue::Required),
            "This field is required."
        );
        assert_eq!(
            issue_message(Language::Farsi, "icons", ValidationIssue::NoneSelected),
            tr(Language::Farsi, "atleast_one_ico")
        );
    }
}

use super::view_model::ExpenseTypeDetailsVm;
use crate::shared::components::shimmer::ShimmerRow;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toast;
use contracts::domain::a001_expense_type::aggregate::SimpleItem;
use contracts::domain::a002_icon::aggregate::IconOption;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// Name inputs in display order: (field, placeholder key, badge key, text direction)
const NAME_FIELDS: [(&str, &str, &str, &str); 3] = [
    ("english", "translate_en", "en", "ltr"),
    ("farsi", "translate_fa", "fa", "rtl"),
    ("pashto", "translate_ps", "ps", "rtl"),
];

/// Create/edit dialog. Reports the saved record through `on_complete`
/// with `edited = true` for an update.
///
/// `read_only` shows an existing record without the save action.
#[component]
pub fn ExpenseTypeDialog(
    #[prop(default = None)] existing: Option<SimpleItem>,
    #[prop(optional)] read_only: bool,
    on_complete: Callback<(SimpleItem, bool)>,
    handle: ModalHandle,
) -> impl IntoView {
    let i18n = use_i18n();
    let toast = use_toast();
    let vm = ExpenseTypeDetailsVm::new(existing);
    vm.load(i18n.current());

    let title = match (read_only, vm.is_edit()) {
        (true, _) => i18n.t("view"),
        (false, true) => i18n.t("edit"),
        (false, false) => i18n.t("add"),
    };
    let form = vm.form;
    let fetching = vm.fetching;
    let loading = vm.loading;

    let close = {
        let handle = handle.clone();
        move |_: leptos::ev::MouseEvent| handle.close()
    };

    let submit = {
        let vm = vm.clone();
        move |_: leptos::ev::MouseEvent| {
            let handle = handle.clone();
            vm.save_command(i18n.current(), toast, on_complete, move || handle.close());
        }
    };

    let name_inputs = NAME_FIELDS
        .into_iter()
        .map(|(field, placeholder_key, badge_key, dir)| {
            let vm = vm.clone();
            view! {
                <Input
                    value=Signal::derive(move || {
                        form.with(|f| f.names.get(field).unwrap_or_default().to_string())
                    })
                    on_input=Callback::new(move |value: String| vm.set_field(field, value))
                    placeholder=i18n.t(placeholder_key)
                    badge=i18n.t(badge_key)
                    required_hint=Signal::derive(move || format!("* {}", i18n.t("required").get()))
                    dir=dir.to_string()
                    loading=Signal::derive(move || fetching.get())
                    disabled=read_only
                    error=Signal::derive(move || form.with(|f| f.error(field)))
                />
            }
        })
        .collect_view();

    let icon_row = {
        let vm = vm.clone();
        move |option: IconOption| {
            let vm = vm.clone();
            let id = option.id;
            let checkbox_id = format!("expense-type-icon-{}", id.as_string());
            view! {
                <tr class="table__row">
                    <td class="table__cell">{option.name.clone()}</td>
                    <td class="table__cell">
                        <img class="icon-picker__image" src=option.path.clone() alt=option.name.clone() />
                    </td>
                    <td class="table__cell">
                        <Checkbox
                            id=checkbox_id
                            checked=Signal::derive(move || {
                                form.with(|f| f.icons.iter().any(|i| i.id == id && i.selected))
                            })
                            on_change=Callback::new(move |checked: bool| vm.toggle_icon(id, checked))
                            disabled=Signal::derive(move || read_only || loading.get())
                        />
                    </td>
                </tr>
            }
        }
    };

    view! {
        <div class="details-dialog" dir=move || i18n.lang.get().dir()>
            <div class="details-dialog__header">
                <h2 class="details-dialog__title">
                    {move || format!("{} {}", title.get(), i18n.t("expense_type").get())}
                </h2>
                <Button appearance=ButtonAppearance::Subtle on_click=close.clone()>
                    {icon("close")}
                </Button>
            </div>

            <div class="details-dialog__body">
                <div class="details-dialog__names">{name_inputs}</div>

                <table class="table icon-picker">
                    <thead>
                        <tr>
                            <th class="table__header-cell">{i18n.t("name")}</th>
                            <th class="table__header-cell">{i18n.t("picture")}</th>
                            <th class="table__header-cell">{i18n.t("action")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || if fetching.get() {
                            view! { <ShimmerRow columns=3 rows=3 /> }.into_any()
                        } else {
                            form.with(|f| f.icons.clone())
                                .into_iter()
                                .map(icon_row.clone())
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
                {move || form.with(|f| f.error("icons")).map(|e| view! {
                    <span class="form__error">{e}</span>
                })}
            </div>

            <div class="details-dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=close>
                    {i18n.t("cancel")}
                </Button>
                {(!read_only).then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || loading.get() || fetching.get())
                        on_click=submit
                    >
                        {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                        {i18n.t("save")}
                    </Button>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::modal_stack::ModalStackService;
    use chrono::Utc;

    fn handle() -> ModalHandle {
        ModalStackService::new().push_with_frame(None, None, |_| ().into_any())
    }

    #[test]
    fn existing_accepts_optional_record() {
        let record = SimpleItem {
            id: "5".to_string(),
            name: "Transport".to_string(),
            created_at: Utc::now(),
        };
        for existing in [None, Some(record)] {
            let props = ExpenseTypeDialogProps::builder()
                .existing(existing.clone())
                .on_complete(Callback::new(|_: (SimpleItem, bool)| {}))
                .handle(handle())
                .build();
            assert_eq!(props.existing, existing);
            assert!(!props.read_only);
        }
    }
}

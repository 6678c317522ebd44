pub mod state;

use self::state::create_state;
use super::details::ExpenseTypeDialog;
use crate::domain::a001_expense_type::api;
use crate::shared::components::shimmer::ShimmerRow;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::use_toast;
use contracts::domain::a001_expense_type::aggregate::SimpleItem;
use contracts::system::permissions::{PermissionKey, UserPermission};
use leptos::prelude::*;
use thaw::*;

/// Expense types tab of the configurations page
#[component]
#[allow(non_snake_case)]
pub fn ExpenseTypeTab(#[prop(into)] permissions: Signal<UserPermission>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let i18n = use_i18n();
    let toast = use_toast();

    let state = create_state();
    let loading = RwSignal::new(false);

    let can_add = move || permissions.with(|p| p.can_add(PermissionKey::EXPENSE_TYPE));
    let can_edit = move || permissions.with(|p| p.can_edit(PermissionKey::EXPENSE_TYPE));
    let can_view = move || permissions.with(|p| p.can_view(PermissionKey::EXPENSE_TYPE));

    let initialize = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let lang = i18n.current();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list(lang).await {
                Ok(items) => state.update(|s| s.set_items(items)),
                Err(e) => {
                    log::error!("Failed to load expense types: {}", e);
                    toast.error(
                        e.display_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| i18n.t_now("request_failed")),
                    );
                }
            }
            loading.set(false);
        });
    };

    let on_complete = Callback::new(move |(record, edited): (SimpleItem, bool)| {
        state.update(|s| s.apply_completion(record, edited));
    });

    let open_dialog = move |existing: Option<SimpleItem>, read_only: bool| {
        modal_stack.push_with_frame(
            None,
            Some("expense-type-dialog".to_string()),
            move |handle| {
                view! {
                    <ExpenseTypeDialog
                        existing=existing.clone()
                        read_only=read_only
                        on_complete=on_complete
                        handle=handle
                    />
                }
                .into_any()
            },
        );
    };

    initialize();

    view! {
        <div class="expense-type-tab">
            <div class="page__toolbar">
                <Show when=can_add>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_dialog(None, false)
                    >
                        {icon("plus")}
                        {i18n.t("add_expense_type")}
                    </Button>
                </Show>
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        class="search-box__input"
                        type="text"
                        placeholder=move || format!("{}...", i18n.t("search").get())
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            state.update(|s| s.search(&query));
                        }
                    />
                </div>
            </div>

            <table class="table expense-type-table">
                <thead>
                    <tr>
                        <th class="table__header-cell">{i18n.t("id")}</th>
                        <th class="table__header-cell">{i18n.t("name")}</th>
                        <th class="table__header-cell">{i18n.t("date")}</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! { <ShimmerRow columns=4 /> }.into_any();
                        }
                        let rows = state.with(|s| s.filtered.clone());
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="4">
                                        {i18n.t("no_records")}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let for_edit = row.clone();
                                let for_view = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--mono">{row.id.clone()}</td>
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{format_date(&row.created_at)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || !can_view())
                                                on_click=move |_| open_dialog(Some(for_view.clone()), true)
                                            >
                                                {icon("eye")}
                                            </Button>
                                            <Show when=can_edit>
                                                {
                                                    let for_edit = for_edit.clone();
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_dialog(Some(for_edit.clone()), false)
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

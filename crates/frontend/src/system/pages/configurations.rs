use crate::domain::a001_expense_type::ui::list::ExpenseTypeTab;
use crate::shared::i18n::use_i18n;
use crate::system::permissions::context::use_permissions;
use contracts::shared::language::Language;
use leptos::prelude::*;
use thaw::*;

/// Tabs of the configurations page: (value, label key)
const TABS: &[(&str, &str)] = &[("expense_type", "expense_type")];

/// Settings page hosting one tab per configuration list.
///
/// Tab content is rebuilt when the language changes so server-composed
/// names are fetched again in the new language.
#[component]
pub fn ConfigurationsPage() -> impl IntoView {
    let i18n = use_i18n();
    let permissions = use_permissions();
    let selected_tab = RwSignal::new(TABS[0].0.to_string());

    view! {
        <div class="page configurations" dir=move || i18n.lang.get().dir()>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{i18n.t("configurations")}</h1>
                </div>
                <div class="page__header-right">
                    <span class="page__header-label">{i18n.t("language")}</span>
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <Button
                                    appearance=move || {
                                        if i18n.lang.get() == lang {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Subtle
                                        }
                                    }
                                    on_click=move |_| i18n.lang.set(lang)
                                >
                                    {i18n.t(lang.code())}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <TabList selected_value=selected_tab>
                {TABS
                    .iter()
                    .map(|(value, label_key)| {
                        view! { <Tab value=value.to_string()>{i18n.t(*label_key)}</Tab> }
                    })
                    .collect_view()}
            </TabList>

            <div class="page__content">
                {move || {
                    let _ = i18n.lang.get();
                    match selected_tab.get().as_str() {
                        "expense_type" => view! { <ExpenseTypeTab permissions=permissions /> }.into_any(),
                        other => {
                            log::warn!("Unknown configurations tab: {}", other);
                            ().into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}

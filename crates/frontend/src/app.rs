use crate::shared::i18n::I18nContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::pages::configurations::ConfigurationsPage;
use crate::system::permissions::context::PermissionProvider;
use contracts::shared::language::Language;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// UI language from the browser, English when unsupported
fn browser_language() -> Language {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|tag| Language::from_code(&tag))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(I18nContext::new(browser_language()));
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <PermissionProvider>
                <ConfigurationsPage />
                <ModalHost />
            </PermissionProvider>
            <ToastHost />
        </ConfigProvider>
    }
}

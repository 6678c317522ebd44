use leptos::prelude::*;

/// Controlled checkbox: reports the new state, the owner decides `checked`
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=is_disabled>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            {move || label.get().map(|l| view! {
                <label class="form__checkbox-label" for=checkbox_id>{l}</label>
            })}
        </div>
    }
}

use leptos::prelude::*;

/// Text input with a leading badge, a required hint and an inline error line.
///
/// While `loading` is set a shimmer placeholder replaces the input.
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Short text rendered in front of the input (e.g. a language code)
    #[prop(optional, into)]
    badge: MaybeProp<String>,
    /// Hint rendered above the input for mandatory fields, e.g. "* required"
    #[prop(optional, into)]
    required_hint: MaybeProp<String>,
    /// Error message shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Render a shimmer instead of the input
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Text direction of the value: "ltr", "rtl" or "auto" (default)
    #[prop(optional, into)]
    dir: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_dir = move || dir.get().unwrap_or_else(|| "auto".to_string());
    let has_error = move || error.get().is_some_and(|e| !e.is_empty());

    view! {
        <div class="form__group">
            {move || required_hint.get().map(|hint| view! {
                <span class="form__required">{hint}</span>
            })}
            {move || if loading.get().unwrap_or(false) {
                view! { <div class="shimmer shimmer--input"></div> }.into_any()
            } else {
                view! {
                    <div class="form__input-row" class:form__input-row--invalid=has_error>
                        {move || badge.get().map(|b| view! {
                            <span class="form__input-badge">{b}</span>
                        })}
                        <input
                            class="form__input"
                            type="text"
                            dir=input_dir
                            prop:value=move || value.get()
                            placeholder=input_placeholder
                            disabled=move || disabled.get().unwrap_or(false)
                            on:input=move |ev| {
                                if let Some(handler) = on_input {
                                    handler.run(event_target_value(&ev));
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
            {move || error.get().filter(|e| !e.is_empty()).map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}

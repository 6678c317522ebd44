use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus the positioned dialog surface. Renders no header or buttons.
#[component]
pub fn ModalFrame(
    /// Called on overlay click.
    on_close: Callback<()>,
    /// z-index of the overlay (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for the surface (`div.modal`).
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay, so a text selection
    // dragged out of the dialog does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class.filter(|c| !c.is_empty()) {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let modal_style = match modal_style.filter(|s| !s.is_empty()) {
        Some(extra) => format!("position: relative; {extra}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

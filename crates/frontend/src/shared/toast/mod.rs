use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a notification stays on screen
pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Notifications currently shown, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// App-wide notifications.
///
/// Every pushed toast removes itself after `AUTO_DISMISS_MS`.
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<ToastStack>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|s| s.dismiss(id));
    }

    fn show(&self, kind: ToastKind, text: String) {
        let mut id = 0;
        self.stack.update(|s| id = s.push(kind, text));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the notification stack. Mount once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.stack.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button
                                class="toast__close"
                                aria-label="close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

use contracts::system::permissions::UserPermission;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Loads the permission object once and provides it as `RwSignal<UserPermission>`.
///
/// Until the request completes (or when it fails) the object is empty,
/// so every gated affordance stays hidden.
#[component]
pub fn PermissionProvider(children: ChildrenFn) -> impl IntoView {
    let permissions = RwSignal::new(UserPermission::default());

    spawn_local(async move {
        match api::fetch_permissions().await {
            Ok(loaded) => {
                log::debug!("Loaded permissions for {} screen(s)", loaded.sub.len());
                permissions.set(loaded);
            }
            Err(e) => log::error!("Failed to load permissions: {}", e),
        }
    });

    provide_context(permissions);

    children()
}

/// Hook to access the permission object
pub fn use_permissions() -> RwSignal<UserPermission> {
    use_context::<RwSignal<UserPermission>>().expect("PermissionProvider not found in component tree")
}

use axum::Json;
use contracts::system::permissions::UserPermission;

use crate::shared::config::get_config;

/// GET /api/system/permissions
///
/// Capabilities of the operator as configured in `[permissions.*]`.
pub async fn current() -> Json<UserPermission> {
    Json(get_config().user_permission())
}

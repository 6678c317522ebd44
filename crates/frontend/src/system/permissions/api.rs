use contracts::shared::api_error::ApiErrorBody;
use contracts::system::permissions::UserPermission;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, transport_error};

/// Fetch the operator's permissions
pub async fn fetch_permissions() -> Result<UserPermission, ApiErrorBody> {
    let response = Request::get(&api_url("/api/system/permissions"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    read_json(response).await
}

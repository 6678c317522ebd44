use axum::{extract::State, Json};
use contracts::domain::a002_icon::aggregate::IconOption;
use sea_orm::DatabaseConnection;

use crate::domain::a002_icon;
use crate::shared::error::ServiceError;

/// GET /api/icons-names
pub async fn list_all(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<IconOption>>, ServiceError> {
    let icons = a002_icon::service::list_options(&db).await?;
    Ok(Json(icons))
}

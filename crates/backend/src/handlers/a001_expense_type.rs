use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a001_expense_type::aggregate::{
    ExpenseTypeDetailResponse, ExpenseTypeDto, ExpenseTypeSaveResponse, SimpleItem,
};
use sea_orm::DatabaseConnection;

use crate::domain::a001_expense_type;
use crate::domain::a001_expense_type::service::{CREATED_MESSAGE, UPDATED_MESSAGE};
use crate::shared::error::ServiceError;
use crate::shared::locale::RequestLanguage;

fn read_body(
    payload: Result<Json<ExpenseTypeDto>, JsonRejection>,
) -> Result<ExpenseTypeDto, ServiceError> {
    payload
        .map(|Json(dto)| dto)
        .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))
}

/// GET /api/expense-types
pub async fn list_all(
    State(db): State<DatabaseConnection>,
    RequestLanguage(lang): RequestLanguage,
) -> Result<Json<Vec<SimpleItem>>, ServiceError> {
    let items = a001_expense_type::service::list_all(&db, lang).await?;
    Ok(Json(items))
}

/// GET /api/expense-types/:id
pub async fn get_by_id(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseTypeDetailResponse>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let expense_type = a001_expense_type::service::get_detail(&db, uuid).await?;
    Ok(Json(ExpenseTypeDetailResponse { expense_type }))
}

/// POST /api/expense-types
pub async fn create(
    State(db): State<DatabaseConnection>,
    RequestLanguage(lang): RequestLanguage,
    payload: Result<Json<ExpenseTypeDto>, JsonRejection>,
) -> Result<Json<ExpenseTypeSaveResponse>, ServiceError> {
    let mut dto = read_body(payload)?;
    dto.id = None;
    let expense_type = a001_expense_type::service::create(&db, dto, lang).await?;
    Ok(Json(ExpenseTypeSaveResponse {
        message: CREATED_MESSAGE.to_string(),
        expense_type,
    }))
}

/// PUT /api/expense-types
pub async fn update(
    State(db): State<DatabaseConnection>,
    RequestLanguage(lang): RequestLanguage,
    payload: Result<Json<ExpenseTypeDto>, JsonRejection>,
) -> Result<Json<ExpenseTypeSaveResponse>, ServiceError> {
    let dto = read_body(payload)?;
    let expense_type = a001_expense_type::service::update(&db, dto, lang).await?;
    Ok(Json(ExpenseTypeSaveResponse {
        message: UPDATED_MESSAGE.to_string(),
        expense_type,
    }))
}

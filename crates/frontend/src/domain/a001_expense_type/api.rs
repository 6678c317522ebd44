//! API client for expense types and the icon catalog

use contracts::domain::a001_expense_type::aggregate::{
    ExpenseTypeDetail, ExpenseTypeDetailResponse, ExpenseTypeDto, ExpenseTypeSaveResponse,
    SimpleItem,
};
use contracts::domain::a002_icon::aggregate::IconOption;
use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::language::Language;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, transport_error, with_locale};

const BASE_URL: &str = "/api/expense-types";

/// List rows, names composed for `lang`
pub async fn fetch_list(lang: Language) -> Result<Vec<SimpleItem>, ApiErrorBody> {
    let response = with_locale(Request::get(&api_url(BASE_URL)), lang)
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    read_json(response).await
}

/// One record with the whole icon catalog, associated icons selected
pub async fn fetch_detail(id: &str, lang: Language) -> Result<ExpenseTypeDetail, ApiErrorBody> {
    let response = with_locale(Request::get(&api_url(&format!("{}/{}", BASE_URL, id))), lang)
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    read_json::<ExpenseTypeDetailResponse>(response)
        .await
        .map(|r| r.expense_type)
}

/// Icon catalog, nothing selected
pub async fn fetch_icons(lang: Language) -> Result<Vec<IconOption>, ApiErrorBody> {
    let response = with_locale(Request::get(&api_url("/api/icons-names")), lang)
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    read_json(response).await
}

/// POST when `dto.id` is empty, PUT otherwise
pub async fn save(dto: &ExpenseTypeDto, lang: Language) -> Result<ExpenseTypeSaveResponse, ApiErrorBody> {
    let url = api_url(BASE_URL);
    let builder = if dto.id.is_some() {
        Request::put(&url)
    } else {
        Request::post(&url)
    };

    let response = with_locale(builder, lang)
        .json(dto)
        .map_err(|e| transport_error("Failed to serialize request", e))?
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    read_json(response).await
}

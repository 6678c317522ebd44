use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;

use crate::{handlers, system};

/// All application routes, bound to `db`
pub fn configure_routes(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM
        // ========================================
        .route(
            "/api/system/permissions",
            get(system::handlers::permissions::current),
        )
        // ========================================
        // CONFIGURATIONS
        // ========================================
        // A001 Expense type handlers
        .route(
            "/api/expense-types",
            get(handlers::a001_expense_type::list_all)
                .post(handlers::a001_expense_type::create)
                .put(handlers::a001_expense_type::update),
        )
        .route(
            "/api/expense-types/:id",
            get(handlers::a001_expense_type::get_by_id),
        )
        // A002 Icon catalog
        .route("/api/icons-names", get(handlers::a002_icon::list_all))
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_icon;
    use crate::shared::data::db::memory_connection;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use contracts::domain::a001_expense_type::aggregate::{
        ExpenseTypeDto, ExpenseTypeNames, ExpenseTypeSaveResponse,
    };
    use contracts::domain::a002_icon::aggregate::IconOption;
    use contracts::shared::api_error::ApiErrorBody;
    use tower::ServiceExt;

    async fn app() -> (Router, Vec<IconOption>) {
        let db = memory_connection().await;
        a002_icon::service::seed_if_empty(&db).await.unwrap();
        let catalog = a002_icon::service::list_options(&db).await.unwrap();
        (configure_routes(db), catalog)
    }

    fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT_LANGUAGE, "en")
            .body(body.into())
            .unwrap()
    }

    fn payload(id: Option<String>, english: &str, icons: Vec<IconOption>) -> String {
        let dto = ExpenseTypeDto {
            id,
            names: ExpenseTypeNames {
                english: english.into(),
                farsi: "سوخت".into(),
                pashto: "تیل".into(),
            },
            icons,
        };
        serde_json::to_string(&dto).unwrap()
    }

    async fn read<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let (app, _) = app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn malformed_detail_id_is_bad_request() {
        let (app, _) = app().await;
        let response = app
            .oneshot(
                Request::get("/api/expense-types/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_with_blank_fields_returns_field_errors() {
        let (app, _) = app().await;
        let body = r#"{"english":"","farsi":" ","pashto":"","icons":[]}"#;
        let response = app
            .oneshot(json_request(Method::POST, "/api/expense-types", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ApiErrorBody = read(response).await;
        assert_eq!(error.message, "The given data was invalid.");
        let errors = error.errors.unwrap();
        for field in ["english", "farsi", "pashto", "icons"] {
            assert!(errors.contains(field), "{field}");
        }
    }

    #[tokio::test]
    async fn invalid_json_body_is_bad_request() {
        let (app, _) = app().await;
        let response = app
            .oneshot(json_request(Method::POST, "/api/expense-types", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiErrorBody = read(response).await;
        assert!(error.display_message().is_some());
        assert!(error.errors.is_none());
    }

    #[tokio::test]
    async fn put_with_unknown_id_is_not_found() {
        let (app, catalog) = app().await;
        let mut icons = catalog;
        icons[0].selected = true;
        let body = payload(Some(uuid::Uuid::new_v4().to_string()), "Fuel", icons);
        let response = app
            .oneshot(json_request(Method::PUT, "/api/expense-types", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ApiErrorBody = read(response).await;
        assert_eq!(error.message, "Expense type not found");
    }

    #[tokio::test]
    async fn post_ignores_client_id_and_put_updates_created_record() {
        let (app, catalog) = app().await;
        let mut icons = catalog;
        icons[0].selected = true;

        let body = payload(Some("client-chosen".into()), "Fuel", icons.clone());
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/expense-types", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created: ExpenseTypeSaveResponse = read(response).await;
        assert_ne!(created.expense_type.id, "client-chosen");
        assert!(uuid::Uuid::parse_str(&created.expense_type.id).is_ok());
        assert_eq!(created.expense_type.name, "Fuel");

        let body = payload(Some(created.expense_type.id.clone()), "Diesel", icons);
        let response = app
            .oneshot(json_request(Method::PUT, "/api/expense-types", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated: ExpenseTypeSaveResponse = read(response).await;
        assert_eq!(updated.expense_type.id, created.expense_type.id);
        assert_eq!(updated.expense_type.name, "Diesel");
    }
}

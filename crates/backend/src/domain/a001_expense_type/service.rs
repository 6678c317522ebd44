use super::repository;
use crate::domain::a002_icon;
use crate::shared::error::ServiceError;
use contracts::domain::a001_expense_type::aggregate::{
    ExpenseType, ExpenseTypeDetail, ExpenseTypeDto, SimpleItem,
};
use contracts::shared::language::Language;
use contracts::shared::validation::{FormErrors, ValidationIssue};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

pub const CREATED_MESSAGE: &str = "Expense type created successfully.";
pub const UPDATED_MESSAGE: &str = "Expense type updated successfully.";

/// Form rules plus the server-only check that every selected icon exists
async fn validate(db: &DatabaseConnection, dto: &ExpenseTypeDto) -> Result<(), ServiceError> {
    let mut issues = dto.validate();

    let selected = dto.selected_icon_ids();
    if !selected.is_empty() {
        let existing = a002_icon::repository::existing_ids(db, &selected).await?;
        if selected.iter().any(|id| !existing.contains(id)) {
            issues.push(("icons", ValidationIssue::UnknownReference));
        }
    }

    if issues.is_empty() {
        return Ok(());
    }
    let errors = FormErrors::from_issues(&issues, |field, issue| issue.default_message(field));
    tracing::warn!("Expense type rejected: {:?}", errors);
    Err(ServiceError::Validation(errors))
}

/// List rows with the name composed for `lang`
pub async fn list_all(
    db: &DatabaseConnection,
    lang: Language,
) -> Result<Vec<SimpleItem>, ServiceError> {
    let items = repository::list_all(db).await?;
    Ok(items.iter().map(|e| e.to_simple_item(lang)).collect())
}

pub async fn get_detail(db: &DatabaseConnection, id: Uuid) -> Result<ExpenseTypeDetail, ServiceError> {
    let aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound("Expense type"))?;
    let catalog = a002_icon::service::list_options(db).await?;
    Ok(aggregate.to_detail(&catalog))
}

pub async fn create(
    db: &DatabaseConnection,
    dto: ExpenseTypeDto,
    lang: Language,
) -> Result<SimpleItem, ServiceError> {
    validate(db, &dto).await?;

    let mut aggregate = ExpenseType::new_for_insert(&dto);
    aggregate.before_write();

    let txn = db.begin().await?;
    repository::insert(&txn, &aggregate).await?;
    txn.commit().await?;

    tracing::info!("Created expense type {}", aggregate.to_string_id());
    Ok(aggregate.to_simple_item(lang))
}

pub async fn update(
    db: &DatabaseConnection,
    dto: ExpenseTypeDto,
    lang: Language,
) -> Result<SimpleItem, ServiceError> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound("Expense type"))?;

    validate(db, &dto).await?;

    aggregate.update(&dto);
    aggregate.metadata.increment_version();
    aggregate.before_write();

    let txn = db.begin().await?;
    repository::update(&txn, &aggregate).await?;
    txn.commit().await?;

    tracing::info!(
        "Updated expense type {} (version {})",
        aggregate.to_string_id(),
        aggregate.metadata.version
    );
    Ok(aggregate.to_simple_item(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use contracts::domain::a001_expense_type::aggregate::ExpenseTypeNames;
    use contracts::domain::a002_icon::aggregate::{IconId, IconOption};

    async fn seeded() -> (DatabaseConnection, Vec<IconOption>) {
        let db = memory_connection().await;
        a002_icon::service::seed_if_empty(&db).await.unwrap();
        let catalog = a002_icon::service::list_options(&db).await.unwrap();
        (db, catalog)
    }

    fn dto(english: &str, farsi: &str, pashto: &str, icons: Vec<IconOption>) -> ExpenseTypeDto {
        ExpenseTypeDto {
            id: None,
            names: ExpenseTypeNames {
                english: english.into(),
                farsi: farsi.into(),
                pashto: pashto.into(),
            },
            icons,
        }
    }

    fn pick(catalog: &[IconOption], indexes: &[usize]) -> Vec<IconOption> {
        catalog
            .iter()
            .enumerate()
            .map(|(i, icon)| IconOption {
                selected: indexes.contains(&i),
                ..icon.clone()
            })
            .collect()
    }

    #[tokio::test]
    async fn create_then_detail_marks_selected_icons() {
        let (db, catalog) = seeded().await;
        let item = create(&db, dto("Fuel", "سوخت", "تیل", pick(&catalog, &[1, 3])), Language::Farsi)
            .await
            .unwrap();
        assert_eq!(item.name, "سوخت");

        let detail = get_detail(&db, Uuid::parse_str(&item.id).unwrap()).await.unwrap();
        assert_eq!(detail.names.english, "Fuel");
        assert_eq!(detail.icons.len(), catalog.len());
        let selected: Vec<usize> = detail
            .icons
            .iter()
            .enumerate()
            .filter(|(_, icon)| icon.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, vec![1, 3]);
    }

    #[tokio::test]
    async fn list_composes_name_for_language_newest_first() {
        let (db, catalog) = seeded().await;
        create(&db, dto("Fuel", "سوخت", "تیل", pick(&catalog, &[0])), Language::English)
            .await
            .unwrap();
        create(&db, dto("Rent", "کرایه", "کرایه", pick(&catalog, &[0])), Language::English)
            .await
            .unwrap();

        let rows = list_all(&db, Language::Pashto).await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["کرایه", "تیل"]);
    }

    #[tokio::test]
    async fn create_rejects_missing_names_and_icons() {
        let (db, catalog) = seeded().await;
        let err = create(&db, dto("Fuel", "", "", pick(&catalog, &[])), Language::English)
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert!(!errors.contains("english"));
                assert!(errors.contains("farsi"));
                assert!(errors.contains("pashto"));
                assert!(errors.contains("icons"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(list_all(&db, Language::English).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_icon() {
        let (db, catalog) = seeded().await;
        let mut icons = pick(&catalog, &[0]);
        icons[0].id = IconId::new_v4();
        let err = create(&db, dto("Fuel", "سوخت", "تیل", icons), Language::English)
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation(errors) => assert!(errors.contains("icons")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_replaces_names_and_icon_set() {
        let (db, catalog) = seeded().await;
        let created = create(&db, dto("Fuel", "سوخت", "تیل", pick(&catalog, &[0, 1])), Language::English)
            .await
            .unwrap();

        let mut edit = dto("Diesel", "دیزل", "ډیزل", pick(&catalog, &[2]));
        edit.id = Some(created.id.clone());
        let updated = update(&db, edit, Language::English).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Diesel");
        assert_eq!(updated.created_at, created.created_at);

        let id = Uuid::parse_str(&created.id).unwrap();
        let stored = repository::get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(stored.icon_ids, vec![catalog[2].id]);
        assert_eq!(stored.metadata.version, 1);
    }

    #[tokio::test]
    async fn update_requires_existing_id() {
        let (db, catalog) = seeded().await;
        let mut edit = dto("Fuel", "سوخت", "تیل", pick(&catalog, &[0]));

        let err = update(&db, edit.clone(), Language::English).await.unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        edit.id = Some(Uuid::new_v4().to_string());
        let err = update(&db, edit, Language::English).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}

use chrono::Utc;
use contracts::domain::a001_expense_type::aggregate::{
    ExpenseType, ExpenseTypeId, ExpenseTypeNames,
};
use contracts::domain::a002_icon::aggregate::IconId;
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_expense_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub english: String,
    pub farsi: String,
    pub pashto: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Many-to-many link between expense types and catalog icons
pub mod icon_link {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a001_expense_type_icon")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub expense_type_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub icon_id: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn into_aggregate(m: Model, icon_ids: Vec<IconId>) -> anyhow::Result<ExpenseType> {
    let uuid = Uuid::parse_str(&m.id)
        .map_err(|e| anyhow::anyhow!("Corrupted expense type id {}: {}", m.id, e))?;
    let metadata = EntityMetadata {
        created_at: m.created_at.unwrap_or_else(Utc::now),
        updated_at: m.updated_at.unwrap_or_else(Utc::now),
        version: m.version,
    };
    Ok(ExpenseType {
        id: ExpenseTypeId(uuid),
        names: ExpenseTypeNames {
            english: m.english,
            farsi: m.farsi,
            pashto: m.pashto,
        },
        icon_ids,
        metadata,
    })
}

fn parse_icon_id(link: &icon_link::Model) -> Option<IconId> {
    match Uuid::parse_str(&link.icon_id) {
        Ok(uuid) => Some(IconId(uuid)),
        Err(e) => {
            tracing::warn!(
                "Skipping link {} -> {}: {}",
                link.expense_type_id,
                link.icon_id,
                e
            );
            None
        }
    }
}

/// All records, newest first
pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<ExpenseType>> {
    let rows = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;

    let mut links: HashMap<String, Vec<IconId>> = HashMap::new();
    for link in icon_link::Entity::find().all(db).await? {
        if let Some(icon_id) = parse_icon_id(&link) {
            links.entry(link.expense_type_id).or_default().push(icon_id);
        }
    }

    rows.into_iter()
        .map(|m| {
            let icon_ids = links.remove(&m.id).unwrap_or_default();
            into_aggregate(m, icon_ids)
        })
        .collect()
}

pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> anyhow::Result<Option<ExpenseType>> {
    let Some(model) = Entity::find_by_id(id.to_string()).one(db).await? else {
        return Ok(None);
    };
    let icon_ids = icon_link::Entity::find()
        .filter(icon_link::Column::ExpenseTypeId.eq(id.to_string()))
        .all(db)
        .await?
        .iter()
        .filter_map(parse_icon_id)
        .collect();
    into_aggregate(model, icon_ids).map(Some)
}

pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &ExpenseType) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        english: Set(aggregate.names.english.clone()),
        farsi: Set(aggregate.names.farsi.clone()),
        pashto: Set(aggregate.names.pashto.clone()),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(db).await?;
    insert_links(db, uuid, &aggregate.icon_ids).await?;
    Ok(uuid)
}

/// Rewrites the names and replaces the whole icon link set
pub async fn update<C: ConnectionTrait>(db: &C, aggregate: &ExpenseType) -> anyhow::Result<()> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        english: Set(aggregate.names.english.clone()),
        farsi: Set(aggregate.names.farsi.clone()),
        pashto: Set(aggregate.names.pashto.clone()),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(db).await?;

    icon_link::Entity::delete_many()
        .filter(icon_link::Column::ExpenseTypeId.eq(uuid.to_string()))
        .exec(db)
        .await?;
    insert_links(db, uuid, &aggregate.icon_ids).await
}

async fn insert_links<C: ConnectionTrait>(
    db: &C,
    expense_type_id: Uuid,
    icon_ids: &[IconId],
) -> anyhow::Result<()> {
    if icon_ids.is_empty() {
        return Ok(());
    }
    let links = icon_ids.iter().map(|icon_id| icon_link::ActiveModel {
        expense_type_id: Set(expense_type_id.to_string()),
        icon_id: Set(icon_id.value().to_string()),
    });
    icon_link::Entity::insert_many(links).exec(db).await?;
    Ok(())
}

use chrono::Utc;
use contracts::domain::a002_icon::aggregate::{Icon, IconId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_icon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub path: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Icon {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("Corrupted icon id {}: {}", m.id, e))?;
        Ok(Icon {
            id: IconId(uuid),
            name: m.name,
            path: m.path,
        })
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Icon>> {
    Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Icon::try_from)
        .collect()
}

pub async fn count<C: ConnectionTrait>(db: &C) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

/// Which of `ids` exist in the catalog
pub async fn existing_ids<C: ConnectionTrait>(
    db: &C,
    ids: &[IconId],
) -> anyhow::Result<HashSet<IconId>> {
    if ids.is_empty() {
        return Ok(HashSet::new());
    }
    let keys: Vec<String> = ids.iter().map(|id| id.value().to_string()).collect();
    let found = Entity::find()
        .filter(Column::Id.is_in(keys))
        .all(db)
        .await?
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.id).ok().map(IconId))
        .collect();
    Ok(found)
}

pub async fn insert<C: ConnectionTrait>(db: &C, icon: &Icon) -> anyhow::Result<Uuid> {
    let uuid = icon.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(icon.name.clone()),
        path: Set(icon.path.clone()),
        created_at: Set(Some(Utc::now())),
    };
    active.insert(db).await?;
    Ok(uuid)
}

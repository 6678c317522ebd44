use super::repository;
use contracts::domain::a002_icon::aggregate::{Icon, IconOption};
use sea_orm::DatabaseConnection;

/// Icons shipped with a fresh database
const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("Fuel", "icons/fuel.svg"),
    ("Food", "icons/food.svg"),
    ("Transport", "icons/transport.svg"),
    ("Rent", "icons/rent.svg"),
    ("Utilities", "icons/utilities.svg"),
    ("Salary", "icons/salary.svg"),
    ("Office supplies", "icons/office.svg"),
    ("Maintenance", "icons/maintenance.svg"),
];

/// Whole catalog as selectable options, nothing selected
pub async fn list_options(db: &DatabaseConnection) -> anyhow::Result<Vec<IconOption>> {
    let icons = repository::list_all(db).await?;
    Ok(icons.iter().map(|icon| icon.to_option(false)).collect())
}

/// Fills an empty catalog with `DEFAULT_ICONS`
pub async fn seed_if_empty(db: &DatabaseConnection) -> anyhow::Result<usize> {
    if repository::count(db).await? > 0 {
        return Ok(0);
    }
    for (name, path) in DEFAULT_ICONS {
        repository::insert(db, &Icon::new_for_insert(*name, *path)).await?;
    }
    tracing::info!("Seeded icon catalog with {} entries", DEFAULT_ICONS.len());
    Ok(DEFAULT_ICONS.len())
}

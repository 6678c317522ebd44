use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables of the configuration module, created on startup when missing
const SCHEMA: &[(&str, &str)] = &[
    (
        "a002_icon",
        r#"
        CREATE TABLE IF NOT EXISTS a002_icon (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            path TEXT NOT NULL,
            created_at TEXT
        );
        "#,
    ),
    (
        "a001_expense_type",
        r#"
        CREATE TABLE IF NOT EXISTS a001_expense_type (
            id TEXT PRIMARY KEY NOT NULL,
            english TEXT NOT NULL,
            farsi TEXT NOT NULL,
            pashto TEXT NOT NULL,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a001_expense_type_icon",
        r#"
        CREATE TABLE IF NOT EXISTS a001_expense_type_icon (
            expense_type_id TEXT NOT NULL,
            icon_id TEXT NOT NULL,
            PRIMARY KEY (expense_type_id, icon_id),
            FOREIGN KEY (expense_type_id) REFERENCES a001_expense_type(id),
            FOREIGN KEY (icon_id) REFERENCES a002_icon(id)
        );
        "#,
    ),
];

pub fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());

    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Creates every missing table. Safe to run on an existing database.
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for (table, sql) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    bootstrap_schema(&conn).await.expect("schema bootstrap");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_url_for_unix_and_windows_paths() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/lib/app/app.db")),
            "sqlite:///var/lib/app/app.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new(r"C:\data\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let conn = memory_connection().await;
        bootstrap_schema(&conn).await.unwrap();
        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["a001_expense_type", "a001_expense_type_icon", "a002_icon"]
        );
    }
}

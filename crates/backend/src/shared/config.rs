use contracts::shared::language::Language;
use contracts::system::permissions::{SubPermission, UserPermission};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Screen key -> capabilities of the operator using this instance
    #[serde(default)]
    pub permissions: BTreeMap<String, SubPermission>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleConfig {
    /// Language used when a request carries no supported `Accept-Language`
    pub default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: "en".to_string(),
        }
    }
}

impl Config {
    pub fn default_language(&self) -> Language {
        Language::from_code(&self.locale.default).unwrap_or_default()
    }

    pub fn user_permission(&self) -> UserPermission {
        UserPermission {
            sub: self.permissions.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "db/app.db"

[locale]
default = "en"

[permissions.expense_configuration_expense_type]
add = true
edit = true
view = true
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Stores the loaded configuration for request-time lookups
pub fn install(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration already installed"))?;
    Ok(get_config())
}

/// Installed configuration, or the embedded default before `install`
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    })
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    // Fallback: relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::PermissionKey;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.default_language(), Language::English);
    }

    #[test]
    fn test_permissions_section_maps_to_user_permission() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "app.db"

            [permissions.expense_configuration_expense_type]
            view = true
            "#,
        )
        .unwrap();
        let permission = config.user_permission();
        assert!(permission.can_view(PermissionKey::EXPENSE_TYPE));
        assert!(!permission.can_add(PermissionKey::EXPENSE_TYPE));
        assert!(!permission.can_edit(PermissionKey::EXPENSE_TYPE));
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str("[database]\npath = \"app.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.permissions.is_empty());
    }

    #[test]
    fn test_unknown_default_locale_falls_back_to_english() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.locale.default = "de".into();
        assert_eq!(config.default_language(), Language::English);
        config.locale.default = "ps".into();
        assert_eq!(config.default_language(), Language::Pashto);
    }

    #[test]
    fn test_absolute_database_path_is_kept() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let absolute = std::env::temp_dir().join("expense.db");
        config.database.path = absolute.to_string_lossy().into_owned();
        assert_eq!(get_database_path(&config).unwrap(), absolute);
    }
}

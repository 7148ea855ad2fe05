use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "admin.toml";

const DEFAULT_CONFIG: &str = r#"
[grid]
initial_page_size = 5
enable_pagination = true

[auth]
demo_email = "test@example.com"
demo_password = "password123"
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub initial_page_size: usize,
    pub enable_pagination: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            initial_page_size: 5,
            enable_pagination: true,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            demo_email: "test@example.com".to_string(),
            demo_password: "password123".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid.initial_page_size == 0 {
            bail!("grid.initial_page_size must be at least 1");
        }
        Ok(())
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("failed to parse config")?;
    config.validate()?;
    Ok(config)
}

pub fn default_config_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "catalog-admin")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads `path` when it exists, otherwise falls back to the embedded default.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        tracing::info!("loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        return parse_config(&contents)
            .with_context(|| format!("invalid config: {}", path.display()));
    }

    tracing::info!("{} not found, using embedded defaults", path.display());
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("catalog-admin-{prefix}-{nanos}"))
    }

    #[test]
    fn embedded_default_matches_struct_default() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config should parse");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("[grid]\ninitial_page_size = 10\n").expect("should parse");

        assert_eq!(config.grid.initial_page_size, 10);
        assert!(config.grid.enable_pagination);
        assert_eq!(config.auth.demo_email, "test@example.com");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = parse_config("[grid]\ninitial_page_size = 0\n");

        assert!(result.is_err(), "zero page size should be rejected");
    }

    #[test]
    fn load_config_reads_file_or_falls_back() {
        let temp_dir = unique_test_dir("config");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let config_path = temp_dir.join(CONFIG_FILE_NAME);

        let fallback = load_config(&config_path).expect("fallback should load");
        assert_eq!(fallback, AppConfig::default());

        fs::write(&config_path, "[grid]\nenable_pagination = false\n")
            .expect("should write config fixture");
        let loaded = load_config(&config_path).expect("file should load");
        assert!(!loaded.grid.enable_pagination);

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}

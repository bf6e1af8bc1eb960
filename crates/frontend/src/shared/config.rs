use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub table: TableConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    /// Идентификатор колонки (`name`, `type`, `period`, `memNote`, `status`, `admitNote`)
    pub default_sort_field: String,
    pub default_sort_ascending: bool,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// 0 отключает индикатор загрузки
    pub loading_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub filename: String,
    pub mime_type: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[table]
default_sort_field = "type"
default_sort_ascending = true
page_size_options = [5, 10, 25]
default_page_size = 10
loading_delay_ms = 1000

[export]
filename = "event-schedule.ics"
mime_type = "text/plain;charset=utf-8"
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let table = &self.table;
        if table.page_size_options.is_empty() {
            bail!("table.page_size_options must not be empty");
        }
        if table.page_size_options.contains(&0) {
            bail!("table.page_size_options must not contain 0");
        }
        if !table.page_size_options.contains(&table.default_page_size) {
            bail!(
                "table.default_page_size {} is not one of {:?}",
                table.default_page_size,
                table.page_size_options
            );
        }
        if self.export.filename.trim().is_empty() {
            bail!("export.filename must not be empty");
        }
        Ok(())
    }
}

/// Load the embedded configuration
///
/// There is no file system in the browser, so the bundle always carries
/// its own defaults.
pub fn load_config() -> anyhow::Result<AppConfig> {
    log::debug!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG)
}

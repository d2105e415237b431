use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub export: ExportConfig,
    pub list: ListConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory export files are written to
    pub dir: String,
    pub csv_delimiter: char,
    /// Rows per printed page of the HTML table
    pub rows_per_page: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub page_size: usize,
    pub min_search_len: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[export]
dir = "target/exports"
csv_delimiter = ";"
rows_per_page = 40

[list]
page_size = 10
min_search_len = 1

[logging]
dir = "target/logs"
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// The embedded default configuration
pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` argument
    Explicit(PathBuf),
    /// `config.toml` next to the executable
    ExeDir(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::ExeDir(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Embedded => write!(f, "embedded defaults"),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. Explicit `--config` path (must exist)
/// 2. `config.toml` next to the executable
/// 3. Falls back to embedded default config
///
/// Runs before logging is set up, so the caller logs the returned source.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config = parse_config(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("cannot read config {}", config_path.display()))?;
                let config = parse_config(&contents)
                    .with_context(|| format!("invalid config {}", config_path.display()))?;
                return Ok((config, ConfigSource::ExeDir(config_path)));
            }
        }
    }

    Ok((default_config()?, ConfigSource::Embedded))
}

/// Resolves a configured path.
/// Relative paths are resolved relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}

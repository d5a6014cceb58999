use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rolodex_core::analytics::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_COMPANIES};
use rolodex_core::rules::{FollowUpWindow, WeekStart};
use rolodex_core::ViewContext;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_samples: bool,
    pub week_start: WeekStart,
    pub recent_limit: usize,
    pub top_companies: usize,
    pub follow_up: FollowUpWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            week_start: WeekStart::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            top_companies: DEFAULT_TOP_COMPANIES,
            follow_up: FollowUpWindow::default(),
        }
    }
}

impl AppConfig {
    /// Applies the configured view knobs on top of a clock-only context.
    pub fn view_context(&self, base: ViewContext) -> ViewContext {
        ViewContext {
            week_start: self.week_start,
            follow_up: self.follow_up,
            recent_limit: self.recent_limit,
            top_companies: self.top_companies,
            ..base
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid recent_limit value: {0}")]
    InvalidRecentLimit(i64),
    #[error("invalid top_companies value: {0}")]
    InvalidTopCompanies(i64),
    #[error("invalid follow_up window: min_days {min}, max_days {max}")]
    InvalidFollowUp { min: i64, max: i64 },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    seed_samples: Option<bool>,
    week_start: Option<WeekStart>,
    recent_limit: Option<i64>,
    top_companies: Option<i64>,
    follow_up: Option<FollowUpFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FollowUpFile {
    min_days: Option<i64>,
    max_days: Option<i64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(seed_samples) = parsed.seed_samples {
        config.seed_samples = seed_samples;
    }
    if let Some(week_start) = parsed.week_start {
        config.week_start = week_start;
    }
    if let Some(limit) = parsed.recent_limit {
        config.recent_limit = validate_limit(limit).ok_or(ConfigError::InvalidRecentLimit(limit))?;
    }
    if let Some(limit) = parsed.top_companies {
        config.top_companies =
            validate_limit(limit).ok_or(ConfigError::InvalidTopCompanies(limit))?;
    }

    if let Some(follow_up) = parsed.follow_up {
        let min = follow_up.min_days.unwrap_or(config.follow_up.min_days());
        let max = follow_up.max_days.unwrap_or(config.follow_up.max_days());
        config.follow_up =
            FollowUpWindow::new(min, max).map_err(|_| ConfigError::InvalidFollowUp { min, max })?;
    }

    Ok(config)
}

fn validate_limit(value: i64) -> Option<usize> {
    let limit = usize::try_from(value).ok()?;
    (1..=MAX_LIST_LIMIT).contains(&limit).then_some(limit)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

//! User configuration (`config.toml`).
//!
//! ```toml
//! snapshot = "/home/me/grids/budget.json"
//! rows = 200
//! ```
//!
//! Every key is optional. Problems with the file are reported as warnings
//! and the defaults are used instead.

use cellgrid_core::document::DEFAULT_ROWS;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    snapshot: Option<PathBuf>,
    rows: Option<usize>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Snapshot file; None when no location could be determined.
    pub snapshot: Option<PathBuf>,
    /// Minimum rows written by export.
    pub rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot: default_snapshot_path(),
            rows: DEFAULT_ROWS,
        }
    }
}

/// Load the config from `config_file`, or the user config path when None.
///
/// Returns the resolved config and any warnings produced along the way.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = Config::default();

    let config_path = config_file.map(Path::to_path_buf).or_else(user_config_path);
    let Some(path) = config_path else {
        return (config, warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    let file = match std::fs::read_to_string(&path) {
        Ok(content) => match parse_config(&content) {
            Ok(parsed) => parsed,
            Err(err) => {
                warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                return (config, warnings);
            }
        },
        Err(err) => {
            warnings.push(format!("Failed to read {}: {}", path.display(), err));
            return (config, warnings);
        }
    };

    if let Some(snapshot) = file.snapshot {
        config.snapshot = Some(snapshot);
    }
    match file.rows {
        Some(0) => warnings.push(format!(
            "Ignoring rows = 0 in {}, using {}",
            path.display(),
            DEFAULT_ROWS
        )),
        Some(rows) => config.rows = rows,
        None => {}
    }

    (config, warnings)
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str::<ConfigFile>(content)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

fn default_snapshot_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellgrid")?;
    let mut path = proj.data_dir().to_path_buf();
    path.push("snapshot.json");
    Some(path)
}

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::RoiConfig;
use crate::errors::RoiError;

pub const CONFIG_FILE_NAME: &str = ".medipyxis-roi.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Where the scenario in effect came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Project(p) => write!(f, "{}", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedConfig {
    pub config: RoiConfig,
    pub source: ConfigSource,
}

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a scenario document. Range checks happen later, in validation.
pub fn parse_config(contents: &str) -> Result<RoiConfig, RoiError> {
    toml::from_str::<RoiConfig>(contents)
        .map_err(|e| RoiError::config_parse(format!("Failed to parse scenario: {e}"), None))
}

/// Load a scenario from a file that must exist.
pub fn load_config_from_path(path: &Path) -> Result<RoiConfig, RoiError> {
    let contents = read_config_file(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RoiError::config_not_found(path)
        } else {
            RoiError::io("Failed to read scenario file", Some(path.to_path_buf()), e)
        }
    })?;

    let config = parse_config(&contents).map_err(|e| match e {
        RoiError::Config { code, message, .. } => RoiError::Config {
            code,
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })?;

    log::debug!("Loaded scenario from {}", path.display());
    Ok(config)
}

/// The directory and its ancestors, nearest first.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<config dir>/medipyxis-roi/config.toml`, when the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("medipyxis-roi").join("config.toml"))
}

/// Resolve the scenario in effect.
///
/// An explicit path wins and must exist. Otherwise the nearest
/// `.medipyxis-roi.toml` from `start` upward, then the user config file, then
/// built-in defaults. A file that exists but does not parse is an error.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<LoadedConfig, RoiError> {
    if let Some(path) = explicit {
        return Ok(LoadedConfig {
            config: load_config_from_path(path)?,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    let project = directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file());

    if let Some(path) = project {
        return Ok(LoadedConfig {
            config: load_config_from_path(&path)?,
            source: ConfigSource::Project(path),
        });
    }

    if let Some(path) = user_config_path().filter(|p| p.is_file()) {
        return Ok(LoadedConfig {
            config: load_config_from_path(&path)?,
            source: ConfigSource::User(path),
        });
    }

    log::debug!(
        "No scenario found after checking {} directories. Using defaults.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(LoadedConfig {
        config: RoiConfig::default(),
        source: ConfigSource::Defaults,
    })
}

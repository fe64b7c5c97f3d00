//! User configuration file
//!
//! Settings are read from YAML. The file is optional: when the default
//! location does not exist the built-in defaults apply. Command-line flags and
//! environment variables take precedence over anything set here.
//!
//! ```yaml
//! project: auto        # default project type, or "auto"
//! install: true        # install dependencies after cloning
//! cd: true             # switch into the project directory afterwards
//! depth: 1             # shallow clone depth
//! projects_dir: ~/src  # where repositories are cloned
//! ```

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "CLONEI_CONFIG";

/// Configuration file name inside the config directory
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loaded configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default project type name or "auto"
    pub project: Option<String>,
    /// Install dependencies after cloning
    pub install: bool,
    /// Change into the cloned directory afterwards
    pub cd: bool,
    /// Shallow clone depth
    pub depth: Option<u32>,
    /// Directory new clones are placed in (default: current directory)
    pub projects_dir: Option<Utf8PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: None,
            install: true,
            cd: true,
            depth: None,
            projects_dir: None,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, `$CLONEI_CONFIG` is used if
    /// set, and otherwise the per-user default location, which may be absent.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            if !env_path.is_empty() {
                return Self::load_file(Utf8Path::new(&env_path));
            }
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a specific file
    pub fn load_file(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(path.as_str(), "file not found")
            } else {
                Error::Io(e)
            }
        })?;

        debug!("Loading configuration from {}", path);
        let config = Self::parse(&content).map_err(|e| match e {
            Error::YamlParse(yaml) => Error::config(path.as_str(), yaml.to_string()),
            other => other,
        })?;
        Ok(config)
    }

    /// Parse YAML content
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml_ng::from_str(content)?;
        config.projects_dir = config.projects_dir.map(expand_home);
        Ok(config)
    }

    /// Directory new clones are placed in
    pub fn projects_dir(&self) -> Utf8PathBuf {
        self.projects_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from("."))
    }
}

/// Per-user configuration file location, e.g. `~/.config/clonei/config.yaml`
pub fn default_config_path() -> Option<Utf8PathBuf> {
    let dir = dirs::config_dir()?;
    let path = Utf8PathBuf::from_path_buf(dir).ok()?;
    Some(path.join("clonei").join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` to the home directory
fn expand_home(path: Utf8PathBuf) -> Utf8PathBuf {
    let Ok(rest) = path.strip_prefix("~").map(Utf8Path::to_path_buf) else {
        return path;
    };
    match dirs::home_dir().and_then(|home| Utf8PathBuf::from_path_buf(home).ok()) {
        Some(home) => home.join(rest),
        None => path,
    }
}

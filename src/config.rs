//! User configuration (YAML)
//!
//! ```yaml
//! editor: code --reuse-window
//! focus: preserve
//! workspaces:
//!   - ~/notes
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, ENV_CONFIG, HOME_CONFIG_FILENAME};
use crate::present::FocusMode;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor command line used to open new notes
    pub editor: Option<String>,
    /// Focus behaviour when opening
    pub focus: Option<FocusMode>,
    /// Workspace roots used when nothing else is open
    pub workspaces: Vec<PathBuf>,
}

impl Config {
    /// Load from `explicit`, $DATE_MD_CONFIG, or the first existing default
    /// location. Missing or broken files give the defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let candidates = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => Self::config_paths(),
        };

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("failed to read {}: {}", path.display(), e);
                    return Self::default();
                }
            }
        }

        Self::default()
    }

    fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Parse YAML; an empty document is the default config
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config = serde_yaml::from_str(content)?;
        config.workspaces = config.workspaces.iter().map(|p| expand_home(p)).collect();
        Ok(config)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. $DATE_MD_CONFIG
        if let Some(path) = std::env::var_os(ENV_CONFIG).filter(|s| !s.is_empty()) {
            paths.push(PathBuf::from(path));
        }

        // 2. Platform config dir: ~/.config/date-md/config.yaml and friends
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME));
        }

        // 3. ~/.date-md.yaml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(HOME_CONFIG_FILENAME));
        }

        paths
    }
}

/// `~/x` → `$HOME/x`
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

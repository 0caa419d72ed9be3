//! Constants for date-md
//!
//! File naming, environment variable names and config locations shared by
//! the library and the binary.

// === File Names ===

/// Extension of every note this tool creates
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Separator between the date stem and the collision counter
pub const SUFFIX_SEPARATOR: &str = "_";

// === Date and Time Format Strings ===

/// Date format for note filenames: %Y%m%d
pub const NOTE_DATE_FORMAT: &str = "%Y%m%d";

// === Environment Variables ===

/// Path of the config file (overrides the platform default)
pub const ENV_CONFIG: &str = "DATE_MD_CONFIG";

/// Document currently open in the host editor
pub const ENV_ACTIVE_DOCUMENT: &str = "DATE_MD_ACTIVE";

/// Open workspace roots, as an OS path list
pub const ENV_WORKSPACES: &str = "DATE_MD_WORKSPACES";

// === Config Locations ===

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "date-md";

/// Config filename inside CONFIG_DIR_NAME
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Fallback config file in the home directory
pub const HOME_CONFIG_FILENAME: &str = ".date-md.yaml";

//! Config module (modularized).
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, default_sc2_root, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config_from_xml};

/// Publisher identifiers the republished maps moved between. Users with a
/// different republish can override both in config.xml or on the CLI.
pub const OLD_PUBLISHER_DEFAULT: &str = "5-S2-1-11831282";
pub const NEW_PUBLISHER_DEFAULT: &str = "5-S2-1-10786818";

/// Region-specific handle prefix selecting the accounts this tool applies to.
pub const HANDLE_PREFIX_DEFAULT: &str = "5-S2-1";

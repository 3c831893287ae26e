//! Configuration for patchbay panels.
//!
//! A panel reads one small TOML file: the cable palette, an optional color
//! seed for reproducible sessions, and the log filter used by binaries.
//!
//! # Example
//!
//! ```rust,no_run
//! use patchbay_config::PanelConfig;
//!
//! let config = PanelConfig::load_or_default().unwrap();
//! let palette = config.palette().unwrap();
//! println!("{} cable colors", palette.len());
//! ```

mod error;
mod panel;

/// Platform-specific configuration paths.
pub mod paths;

pub use error::ConfigError;
pub use panel::{DEFAULT_LOG_FILTER, PanelConfig};
pub use paths::{default_config_path, ensure_user_config_dir, user_config_dir};

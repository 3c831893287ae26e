//! Panel configuration file.

use std::path::Path;

use patchbay_core::{ColorTag, PatchController, SignalGraph, StdRng, WirePalette};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths::default_config_path;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "patchbay=info";

/// Settings for one patch panel session.
///
/// ```toml
/// palette = ["#000000", "#ffffff", "#dd0808"]
/// color_seed = 42
/// log_filter = "patchbay=debug"
/// ```
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Cable colors as `#rrggbb` strings. Repeat an entry to weight it.
    pub palette: Vec<String>,

    /// Seed for cable color selection. Absent means a fresh seed per session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_seed: Option<u64>,

    /// `tracing` filter directive for binaries and demos.
    pub log_filter: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::with_palette(&WirePalette::default())
    }
}

impl PanelConfig {
    /// Default settings with `palette` as the cable colors.
    pub fn with_palette(palette: &WirePalette) -> Self {
        Self {
            palette: palette.colors().iter().map(ColorTag::to_string).collect(),
            color_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Sets a fixed color seed.
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the user's configuration file, falling back to the defaults when
    /// there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from(default_config_path())
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parses the palette.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidColor`] for the first unparsable entry,
    /// [`ConfigError::EmptyPalette`] if there are no entries.
    pub fn palette(&self) -> Result<WirePalette, ConfigError> {
        let colors = self
            .palette
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .parse::<ColorTag>()
                    .map_err(|source| ConfigError::InvalidColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        WirePalette::new(colors).ok_or(ConfigError::EmptyPalette)
    }

    /// Color source for a new session: seeded when `color_seed` is set.
    pub fn color_rng(&self) -> StdRng {
        match self.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Checks that the configuration can be applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette().map(|_| ())
    }

    /// Builds a controller over `graph` using these settings.
    pub fn controller<G: SignalGraph>(&self, graph: G) -> Result<PatchController<G>, ConfigError> {
        Ok(PatchController::with_colors(
            graph,
            self.palette()?,
            self.color_rng(),
        ))
    }
}

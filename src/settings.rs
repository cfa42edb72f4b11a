use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{color::*, error::*};

pub const DEFAULT_TOLERANCE: f32 = 0.001;

/// Parameters of a single remap.
///
/// With `use_swapper` set, matched pixels take the colocated entry of the swap
/// strip. Otherwise they take the matched reference entry shifted by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemapSettings {
    pub tolerance: f32,
    pub use_swapper: bool,
    pub offset: Offset,
    pub threads: usize,
}

impl Default for RemapSettings {
    fn default() -> RemapSettings {
        RemapSettings {
            tolerance: DEFAULT_TOLERANCE,
            use_swapper: true,
            offset: Offset::default(),
            threads: 1,
        }
    }
}

impl RemapSettings {
    pub fn swap(tolerance: f32) -> Self {
        RemapSettings { tolerance, use_swapper: true, ..Default::default() }
    }

    pub fn offset(tolerance: f32, offset: Offset) -> Self {
        RemapSettings { tolerance, use_swapper: false, offset, ..Default::default() }
    }

    pub fn with_threads(self, threads: usize) -> Self {
        RemapSettings { threads, ..self }
    }

    pub fn from_json(src: &str) -> serde_json::Result<RemapSettings> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<RemapSettings> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<RemapSettings, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<RemapSettings, SettingsError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(match path.as_ref().extension().ok_or(SettingsError::ExtensionError)?.to_str() {
            Some("json") => RemapSettings::from_json(&contents)?,
            Some("ron") => RemapSettings::from_ron(&contents)?,
            Some("yaml" | "yml") => RemapSettings::from_yaml(&contents)?,
            _ => return Err(SettingsError::ExtensionError),
        })
    }
}

use thiserror::Error;

use palswap::{RemapError, SettingsError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to load settings\n{0}")]
    SettingsError(#[from] SettingsError),
    #[error("could not read or write image\n{0}")]
    ImageError(#[from] image::ImageError),
    #[error("could not remap image, {0}")]
    RemapError(#[from] RemapError),
}

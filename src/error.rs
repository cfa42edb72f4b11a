use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RemapError {
    #[error("invalid input, {0}")]
    InvalidInput(String),
    #[error("swap strip has {swap} palette entries in row 0, reference strip has {reference}")]
    DimensionMismatch { reference: usize, swap: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum ImageError {
    #[error("expected {width}x{height} pixels, got {len}")]
    SizeMismatch { width: usize, height: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not parse settings file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse settings file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse settings file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read settings file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("settings file does not have valid extension (must be .json, .ron or .yaml)")]
    ExtensionError,
}

//! Theme error types

use crate::extra::ExtraKind;
use crate::part::Part;
use std::path::PathBuf;
use thiserror::Error;

/// Theme-related errors
///
/// Apart from the config variants these are programming errors on the
/// caller's side; themes report them instead of painting something wrong.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Numeric part outside `0..Part::COUNT`
    #[error("part index {0} is out of range")]
    PartOutOfRange(u32),

    /// Numeric state outside `0..State::COUNT`
    #[error("state index {0} is out of range")]
    StateOutOfRange(u32),

    #[error("unknown part: {0}")]
    UnknownPart(String),

    #[error("unknown state: {0}")]
    UnknownState(String),

    #[error("unknown theme style: {0}")]
    UnknownStyle(String),

    /// Extra params variant does not belong to the part
    #[error(
        "{part} takes {} extra params, got {found}",
        .expected.map_or("no", |kind| kind.name())
    )]
    ExtraMismatch {
        part: Part,
        expected: Option<ExtraKind>,
        found: ExtraKind,
    },

    /// The theme has no visual definition for the part
    #[error("theme {theme} does not draw {part}")]
    Unthemed { theme: String, part: Part },

    /// A theme instance is already active for this process
    #[error("native theme already initialized")]
    AlreadyInitialized,

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("failed to read theme config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse theme config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize theme config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl From<mimic_paint::ColorParseError> for ThemeError {
    fn from(err: mimic_paint::ColorParseError) -> Self {
        ThemeError::InvalidColor(err.0)
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

//! Configure the geometry of a collapsing header.
//!
//! [`Settings`] can be built in code or, with the `serde` feature enabled,
//! loaded from a RON file:
//!
//! ```ron
//! (
//!     min_header_height: 88.0,
//!     max_header_height: 240.0,
//! )
//! ```
use std::path::Path;

/// The settings of a collapsing header screen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The height of the header when fully collapsed.
    pub min_header_height: f32,

    /// The height of the header when fully expanded.
    pub max_header_height: f32,

    /// The maximum amount of scroll notifications delivered in a row for a
    /// single surface while offset corrections keep changing it.
    pub max_feedback_notifications: usize,
}

impl Settings {
    /// The default height of a collapsed header.
    pub const DEFAULT_MIN_HEADER_HEIGHT: f32 = 100.0;

    /// The default height of an expanded header.
    pub const DEFAULT_MAX_HEADER_HEIGHT: f32 = 200.0;

    /// Creates new [`Settings`] with the given header heights.
    pub fn new(min_header_height: f32, max_header_height: f32) -> Self {
        Self {
            min_header_height,
            max_header_height,
            ..Self::default()
        }
    }

    /// Returns the scrollable range of the outer surface, which is also its
    /// top content inset.
    pub fn top_inset(&self) -> f32 {
        (self.max_header_height - self.min_header_height).max(0.0)
    }

    /// Checks that the header heights describe a valid range.
    pub fn validate(&self) -> Result<(), Error> {
        let Settings {
            min_header_height: min,
            max_header_height: max,
            ..
        } = *self;

        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < min {
            return Err(Error::InvalidHeights { min, max });
        }

        if self.max_feedback_notifications == 0 {
            return Err(Error::NoFeedbackNotifications);
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_header_height: Self::DEFAULT_MIN_HEADER_HEIGHT,
            max_header_height: Self::DEFAULT_MAX_HEADER_HEIGHT,
            max_feedback_notifications: 8,
        }
    }
}

/// An error that occurred while loading [`Settings`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// File not found.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read settings: {0}")]
    Read(String),
    /// Failed to parse settings file.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    /// The header heights do not describe a valid range.
    #[error("invalid header heights: min {min}, max {max}")]
    InvalidHeights {
        /// The minimum height that was provided.
        min: f32,
        /// The maximum height that was provided.
        max: f32,
    },
    /// The feedback notification cap is zero.
    #[error("at least one scroll notification must be delivered")]
    NoFeedbackNotifications,
}

/// Loads [`Settings`] from a file path.
///
/// Supports RON format (.ron extension) when the `serde` feature is enabled.
/// The loaded settings are validated.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings, Error> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(std::ffi::OsStr::to_str).unwrap_or("");

    match extension {
        "ron" => {
            let content =
                std::fs::read_to_string(path).map_err(|e| Error::Read(e.to_string()))?;

            let settings = from_ron(&content)?;
            log::debug!("loaded settings from {}: {settings:?}", path.display());

            Ok(settings)
        }
        _ => Err(Error::UnsupportedFormat(extension.to_string())),
    }
}

/// Parses [`Settings`] from RON text.
///
/// Missing fields fall back to their defaults.
#[cfg(feature = "serde")]
pub fn from_ron(content: &str) -> Result<Settings, Error> {
    let settings: Settings = ron::from_str(content).map_err(|e| Error::Parse(e.to_string()))?;
    settings.validate()?;

    Ok(settings)
}

/// Parses [`Settings`] from RON text.
#[cfg(not(feature = "serde"))]
pub fn from_ron(_content: &str) -> Result<Settings, Error> {
    Err(Error::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_string(),
    ))
}

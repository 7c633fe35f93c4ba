// SPDX-License-Identifier: MIT OR Apache-2.0
//! Demo configuration, stored as RON.

use crate::driver::Easing;
use color_reveal_sequencer::{ColorParseError, Rgba, SequencerConfig};
use color_reveal_shape::{AnimationKind, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// A color change requested at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRequest {
    /// Time of the request in seconds
    pub at: f32,
    /// Color as `#RRGGBB` or `#RRGGBBAA`
    pub color: String,
}

impl ColorRequest {
    /// Create a request
    pub fn new(at: f32, color: impl Into<String>) -> Self {
        Self {
            at,
            color: color.into(),
        }
    }
}

/// Everything the demo needs to play a color script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Format version
    pub version: u32,
    /// Target rect
    pub rect: Rect,
    /// Sweep used for every layer
    pub kind: AnimationKind,
    /// Easing applied by the driver
    pub easing: Easing,
    /// Frames per second
    pub frame_rate: f32,
    /// Initial background color
    pub base_color: String,
    /// Scripted color changes
    pub script: Vec<ColorRequest>,
    /// Sequencer timing and queue bound
    pub sequencer: SequencerConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            rect: Rect::new(320.0, 180.0),
            kind: AnimationKind::angle(30.0),
            easing: Easing::EaseInOut,
            frame_rate: 30.0,
            base_color: "#FFFFFF".to_string(),
            script: vec![
                ColorRequest::new(0.0, "#E53935"),
                ColorRequest::new(0.5, "#1E88E5"),
                ColorRequest::new(3.0, "#43A047"),
            ],
            sequencer: SequencerConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&content)?;
        tracing::debug!("Loaded demo config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate RON text
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, config)
    }

    /// Check version, rect, frame rate and colors
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }
        let rect = self.rect;
        let extent_ok = |extent: f32| extent.is_finite() && extent >= 0.0;
        if !(extent_ok(rect.width) && extent_ok(rect.height)) {
            return Err(ConfigError::InvalidRect {
                width: rect.width,
                height: rect.height,
            });
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        // The driver only learns about layers through events
        if self.sequencer.max_events == 0 {
            return Err(ConfigError::EventsDisabled);
        }
        self.base_color()?;
        self.color_script()?;
        Ok(())
    }

    /// Parsed initial background color
    pub fn base_color(&self) -> Result<Rgba, ConfigError> {
        parse_color(&self.base_color)
    }

    /// Parsed script, sorted by request time
    pub fn color_script(&self) -> Result<Vec<(f32, Rgba)>, ConfigError> {
        let mut script = self
            .script
            .iter()
            .map(|request| -> Result<(f32, Rgba), ConfigError> {
                Ok((request.at.max(0.0), parse_color(&request.color)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        script.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(script)
    }

    /// Seconds per frame
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

fn parse_color(value: &str) -> Result<Rgba, ConfigError> {
    Rgba::from_hex(value).map_err(|source| ConfigError::InvalidColor {
        value: value.to_string(),
        source,
    })
}

/// Error loading a demo config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// RON syntax or shape error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Written by a newer version
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Highest version understood
        supported: u32,
    },

    /// Rect extents must be finite and non-negative
    #[error("Invalid rect size: {width}x{height}")]
    InvalidRect {
        /// Width in the config
        width: f32,
        /// Height in the config
        height: f32,
    },

    /// Frame rate must be positive
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    /// Sequencer would drop every event before the driver sees it
    #[error("sequencer.max_events must be at least 1")]
    EventsDisabled,

    /// A color string did not parse
    #[error("Invalid color {value:?}: {source}")]
    InvalidColor {
        /// Offending value
        value: String,
        /// Parse failure
        source: ColorParseError,
    },
}

//! Resize configuration.

use thiserror::Error;

/// Tunables for hover detection and width limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Distance from a column's right edge within which hover arms resizing.
    pub activation_band: f64,

    /// How far left of the neighbor's right edge the pointer may be and still
    /// count as near it.
    pub neighbor_tolerance: f64,

    /// Minimum width for columns without their own `min_width`.
    pub default_min_width: u32,

    /// Maximum width for columns without their own `max_width`.
    pub default_max_width: u32,

    /// When true, only the primary button opens a drag.
    pub left_button_only: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            activation_band: 8.0,
            neighbor_tolerance: 1.0,
            default_min_width: 80,
            default_max_width: 600,
            left_button_only: true,
        }
    }
}

impl ResizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activation band.
    pub fn activation_band(mut self, band: f64) -> Self {
        self.activation_band = band;
        self
    }

    /// Set the neighbor tolerance.
    pub fn neighbor_tolerance(mut self, tolerance: f64) -> Self {
        self.neighbor_tolerance = tolerance;
        self
    }

    /// Set the default minimum column width.
    pub fn default_min_width(mut self, min: u32) -> Self {
        self.default_min_width = min;
        self
    }

    /// Set the default maximum column width.
    pub fn default_max_width(mut self, max: u32) -> Self {
        self.default_max_width = max;
        self
    }

    /// Accept presses from any mouse button.
    pub fn any_button(mut self) -> Self {
        self.left_button_only = false;
        self
    }

    /// Check the config for values the controller can't work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.activation_band.is_finite() || self.activation_band < 0.0 {
            return Err(ConfigError::InvalidBand(self.activation_band));
        }
        if !self.neighbor_tolerance.is_finite() || self.neighbor_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.neighbor_tolerance));
        }
        if self.default_min_width >= self.default_max_width {
            return Err(ConfigError::EmptyWidthRange {
                min: self.default_min_width,
                max: self.default_max_width,
            });
        }
        Ok(())
    }
}

/// Errors from [`ResizeConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("activation band must be a finite, non-negative distance (got {0})")]
    InvalidBand(f64),

    #[error("neighbor tolerance must be a finite, non-negative distance (got {0})")]
    InvalidTolerance(f64),

    /// Default limits leave no room to resize.
    #[error("default min width ({min}) must be below default max width ({max})")]
    EmptyWidthRange { min: u32, max: u32 },
}

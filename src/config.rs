//! Picker construction options.

use crate::constants;

/// Surface size and styling for a [`crate::ColourPicker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    pub width: u32,
    pub height: u32,
    /// Clear band kept inside the triangle edges, in pixels.
    pub margin: f64,
    /// RGBA8 fill behind the ring and triangle.
    pub background: [u8; 4],
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_SIZE,
            height: constants::DEFAULT_SIZE,
            margin: constants::TRIANGLE_MARGIN,
            background: constants::BACKGROUND,
        }
    }
}

impl PickerConfig {
    /// Build from optional caller dimensions.
    ///
    /// A missing, NaN or non-positive width becomes [`constants::DEFAULT_SIZE`];
    /// an invalid height falls back to the resolved width. Valid values are
    /// rounded to whole pixels and clamped to [`constants::MAX_DIMENSION`].
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        let (width, height) = resolve_dimensions(width, height);
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background(mut self, background: [u8; 4]) -> Self {
        self.background = background;
        self
    }
}

fn valid_dimension(value: Option<f64>) -> Option<u32> {
    match value {
        // `0.4` rounds to zero, which is still not a usable surface
        Some(v) if v.is_finite() && v > 0.0 && v.round() >= 1.0 => {
            Some(v.round().min(constants::MAX_DIMENSION as f64) as u32)
        }
        _ => None,
    }
}

pub(crate) fn resolve_dimensions(width: Option<f64>, height: Option<f64>) -> (u32, u32) {
    let width = valid_dimension(width).unwrap_or(constants::DEFAULT_SIZE);
    let height = valid_dimension(height).unwrap_or(width);
    (width, height)
}

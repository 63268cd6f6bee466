//! SolidColor — the color value reported by the picker — and its HSV view.
//!
//! Stores RGBA as f64 values in the 0.0–1.0 range. Conversions go through
//! [`crate::math`].

use crate::math;

/// A color in HSV space: hue in degrees, saturation and value 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    /// Opaque black, the selection before the first update.
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl SolidColor {
    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8([r, g, b, 255])
    }

    /// Create from a raw RGBA8 pixel.
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self {
            r: px[0] as f64 / 255.0,
            g: px[1] as f64 / 255.0,
            b: px[2] as f64 / 255.0,
            a: px[3] as f64 / 255.0,
        }
    }

    /// Quantize to an RGBA8 pixel.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            math::channel_to_u8(self.r),
            math::channel_to_u8(self.g),
            math::channel_to_u8(self.b),
            math::channel_to_u8(self.a),
        ]
    }

    /// Create from HSV with hue in degrees.
    pub fn from_hsv(hsv: Hsv, a: f64) -> Self {
        let (r, g, b) = math::hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self { r, g, b, a }
    }

    /// Convert to HSV. Hue is reported in [0, 360).
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(self.r, self.g, self.b);
        Hsv { h, s, v }
    }

    /// Parse `RGB`, `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let mut px = [255u8; 4];
                for (slot, i) in px.iter_mut().zip(0..3) {
                    *slot = u8::from_str_radix(&digits[i..i + 1], 16).ok()? * 17;
                }
                Some(Self::from_rgba8(px))
            }
            6 => Some(Self::from_rgba8([byte(0)?, byte(2)?, byte(4)?, 255])),
            8 => Some(Self::from_rgba8([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
            _ => None,
        }
    }

    /// Uppercase hex without `#`: `RRGGBB` when opaque, `RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// True when every RGBA channel is within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &SolidColor, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }
}

//! Sizing, color, and styling constants for the picker.

/// Surface side length used when no valid dimension is given
pub const DEFAULT_SIZE: u32 = 128;

/// Largest surface side accepted; bigger requests are clamped
pub const MAX_DIMENSION: u32 = 8192;

/// The hue ring is `min(width, height) / RING_DIVISOR` thick
pub const RING_DIVISOR: f64 = 12.0;

/// Pixels kept clear along the triangle edges so antialiased
/// border pixels are never selectable
pub const TRIANGLE_MARGIN: f64 = 3.0;

/// Extra inset for the lightness gradient so edge colours stay reachable
pub const GRADIENT_INSET: f64 = 4.0;

/// Background behind the ring and triangle (#848380)
pub const BACKGROUND: [u8; 4] = [0x84, 0x83, 0x80, 0xFF];

/// Initial triangle point
pub const INITIAL_POINT: (f64, f64) = (0.5, 0.05);

/// Inner (white) and outer (black) radius of the triangle marker
pub const MARKER_INNER_RADIUS: f64 = 4.0;
pub const MARKER_OUTER_RADIUS: f64 = 5.0;

/// Stroke width for indicator lines and marker rings
pub const INDICATOR_STROKE: f64 = 1.0;

/// Per-channel difference allowed between a colour passed to `set_color`
/// and the colour then sampled from the surface. Placement is calibrated
/// against the painted gradients, leaving half a pixel of gradient step plus
/// byte rounding per pass
pub const SET_COLOR_TOLERANCE: f64 = 8.0 / 255.0;

//! # floem-triangle
//!
//! An HSV colour picker made of a hue ring around a saturation/value
//! triangle. The crate holds the geometry engine (measurements, coordinate
//! mapping, hit testing and drag clamping), the tiny-skia surfaces the
//! picker paints into and samples its colour from, and, with the `view`
//! feature, a [Floem](https://github.com/lapce/floem) widget.
//!
//! ## Usage
//!
//! ```rust
//! use floem_triangle::{ColourPicker, PickerConfig, PickerError, PointerEvent};
//!
//! let mut picker = ColourPicker::new(PickerConfig::new(Some(128.0), None), |c| {
//!     println!("#{}", c.to_hex());
//! })?;
//! // drag the hue ring from 0° down to 90°
//! picker.pointer_down(PointerEvent::local(122.0, 64.0));
//! picker.pointer_up(PointerEvent::local(64.0, 122.0));
//! assert!((picker.hue() - 90.0).abs() < 1e-9);
//! # Ok::<(), PickerError>(())
//! ```

mod color;
mod config;
mod constants;
mod error;
mod hit;
mod mapping;
mod math;
mod measure;
mod picker;
mod raster;
mod render;
#[cfg(feature = "view")]
mod view;

pub use color::{Hsv, SolidColor};
pub use config::PickerConfig;
pub use constants::{DEFAULT_SIZE, MAX_DIMENSION, SET_COLOR_TOLERANCE, TRIANGLE_MARGIN};
pub use error::PickerError;
pub use hit::{clamp_to_triangle, classify, in_ring, TriangleHit};
pub use mapping::{
    hsv_to_point, hsv_to_rendered_point, pixel_to_point, point_to_hsv, point_to_pixel,
    sample_color, TrianglePoint,
};
pub use measure::{Measurements, Point, SaturationRow};
pub use picker::{drag_mode_at, hue_at, ColourPicker, DragMode, PickerState, PointerEvent, ScreenRect};
pub use tiny_skia::Pixmap;
#[cfg(feature = "view")]
pub use view::{colour_picker, PickerView};

//! Error types for the picker's raster surfaces.

use thiserror::Error;

/// Errors that can occur when allocating or sampling a surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The requested pixel lies outside the buffer
    #[error("sample coordinate ({x}, {y}) outside {width}x{height} surface")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// A pixmap of this size could not be allocated
    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}

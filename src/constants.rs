//! Sizing, color, and layout constants for the picker.

/// Raster resolution (pixels per side) of the cached wheel image.
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// Canvas background color, RGB 0.0–1.0.
pub const BACKGROUND: (f64, f64, f64) = (0.2, 0.3, 0.3);

/// Alpha handle left edge, in NDC units.
pub const HANDLE_LEFT: f64 = 0.75;

/// Alpha handle half-height, in NDC units.
pub const HANDLE_HALF_HEIGHT: f64 = 0.05;

/// Alpha handle fill, gray level 0.0–1.0.
pub const HANDLE_GRAY: f64 = 137.0 / 255.0;

/// Swatch horizontal extent in NDC units.
pub const SWATCH_X: (f64, f64) = (-0.5, 0.5);

/// Swatch vertical extent in NDC units.
pub const SWATCH_Y: (f64, f64) = (-0.9, -0.8);

/// Checkerboard cell size under the swatch, in pixels.
pub const CHECKER_CELL: f64 = 5.0;

/// Channel readout font size.
pub const READOUT_FONT: f32 = 13.0;

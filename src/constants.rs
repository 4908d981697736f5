//! Global constants for the picker engine

/// Default thumb diameter (wheel) and thumb width (slider) in pixels
pub const DEFAULT_THUMB_SIZE: f32 = 50.0;

/// Default brightness value for a freshly constructed picker
pub const DEFAULT_INITIAL_VALUE: f32 = 1.0;

/// Divisor applied to the thumb size when widening the wheel's hit-test band
/// beyond its visual radius
pub const THUMB_TOLERANCE_DIVISOR: f32 = 1.5;

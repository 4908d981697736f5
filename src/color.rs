//! Color types and HSV to RGB conversion.

/// A color in HSV space.
///
/// Hue is in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a new RGB color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Convert HSV values to 8-bit RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0-1)
/// * `v` - Value (0-1)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb8 {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb8::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Pack an RGB color into a single numeric value, `0xRRGGBB`.
///
/// The result is at most 2^24 - 1 and therefore exactly representable
/// as an `f32`, so packed colors survive graph propagation unchanged.
pub fn pack_rgb(color: Rgb8) -> f32 {
    let packed = (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b);
    packed as f32
}

/// Unpack a numeric `0xRRGGBB` value back into an RGB color.
pub fn unpack_rgb(packed: f32) -> Rgb8 {
    let bits = packed as u32;
    Rgb8::new(
        ((bits >> 16) & 0xFF) as u8,
        ((bits >> 8) & 0xFF) as u8,
        (bits & 0xFF) as u8,
    )
}

/// Grayscale swatch for a brightness value in `[0, 1]`.
pub fn value_to_grayscale(value: f32) -> Rgb8 {
    let level = (value * 255.0).round() as u8;
    Rgb8::new(level, level, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb8::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb8::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_secondary_colors() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb8::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb8::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb8::new(255, 0, 255));
    }

    #[test]
    fn test_hsv_white_and_black() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Rgb8::new(255, 255, 255));

        // Value 0 is black at any hue.
        assert_eq!(hsv_to_rgb(0.0, 1.0, 0.0), Rgb8::new(0, 0, 0));
        assert_eq!(hsv_to_rgb(90.0, 1.0, 0.0), Rgb8::new(0, 0, 0));
        assert_eq!(hsv_to_rgb(210.0, 0.3, 0.0), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn test_hsv_rounding() {
        // h=0, s=0.5, v=0.5: c=0.25, m=0.25, r=0.5, g=b=0.25
        assert_eq!(hsv_to_rgb(0.0, 0.5, 0.5), Rgb8::new(128, 64, 64));
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        for color in [
            Rgb8::new(0, 0, 0),
            Rgb8::new(255, 255, 255),
            Rgb8::new(128, 64, 32),
            Rgb8::new(1, 2, 3),
            Rgb8::new(255, 0, 255),
        ] {
            assert_eq!(unpack_rgb(pack_rgb(color)), color);
        }
    }

    #[test]
    fn test_pack_layout() {
        assert_eq!(pack_rgb(Rgb8::new(0xAB, 0xCD, 0xEF)), 0x00AB_CDEF as f32);
        assert_eq!(pack_rgb(Rgb8::new(255, 0, 0)), 0x00FF_0000 as f32);
    }

    #[test]
    fn test_value_to_grayscale() {
        assert_eq!(value_to_grayscale(0.0), Rgb8::new(0, 0, 0));
        assert_eq!(value_to_grayscale(0.5), Rgb8::new(128, 128, 128));
        assert_eq!(value_to_grayscale(1.0), Rgb8::new(255, 255, 255));
    }
}

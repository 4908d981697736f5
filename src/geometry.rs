//! Wheel and slider geometry.
//!
//! This module contains the mathematical functions that map gesture
//! positions to hue/saturation/value, extracted for testability.
//!
//! Coordinates are widget-local pixels with y growing downward. Thumb
//! positions are anchored at the thumb's top-left corner, so the wheel's
//! `center` coordinate is already offset by half a thumb.

use crate::constants::THUMB_TOLERANCE_DIVISOR;

/// A position in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Convert a polar offset to cartesian coordinates.
///
/// # Arguments
/// * `angle_deg` - Angle in degrees
/// * `radius` - Distance from the origin in pixels
pub fn to_cartesian(angle_deg: f32, radius: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(rad.cos() * radius, rad.sin() * radius)
}

/// Euclidean distance between a point and a center.
pub fn distance(p: Point, center: Point) -> f32 {
    (p.x - center.x).hypot(p.y - center.y)
}

/// Snap a position to the center when it is strictly closer than `threshold`.
///
/// A threshold of zero disables snapping.
pub fn snap_to_center(pos: Point, center: Point, threshold: f32) -> Point {
    if distance(pos, center) < threshold {
        center
    } else {
        pos
    }
}

/// Clamp a position to a circle, projecting outside points onto the
/// boundary along the same ray from the center.
pub fn clamp_to_circle(pos: Point, center: Point, radius: f32) -> Point {
    let d = distance(pos, center);
    if d <= radius {
        return pos;
    }
    // The direction at the exact center is taken as angle 0.
    let (ux, uy) = if d == 0.0 {
        (1.0, 0.0)
    } else {
        ((pos.x - center.x) / d, (pos.y - center.y) / d)
    };
    Point::new(center.x + ux * radius, center.y + uy * radius)
}

/// Decode a thumb position into a hue/saturation pair.
///
/// The position is expected to already be snapped and clamped. A position
/// at the exact center decodes to hue 0 and saturation 0.
///
/// # Arguments
/// * `pos` - Thumb position, top-left anchored
/// * `center` - Wheel center in the same coordinate frame
/// * `radius` - Wheel radius in pixels
///
/// # Returns
/// `(hue, saturation)` with hue in `[0, 360)` and saturation in `[0, 1]`.
/// The lower half-plane (y below the center) mirrors the angle into
/// `[180, 360)` so the full hue range is reachable.
pub fn position_to_hue_saturation(pos: Point, center: Point, radius: f32) -> (f32, f32) {
    let d = distance(pos, center);
    if d == 0.0 {
        return (0.0, 0.0);
    }
    let cos_t = ((pos.x - center.x) / d).clamp(-1.0, 1.0);
    let angle = cos_t.acos().to_degrees();
    let hue = if pos.y - center.y > 0.0 {
        360.0 - angle
    } else {
        angle
    };
    let saturation = if radius > 0.0 {
        (d / radius).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (hue, saturation)
}

/// Geometry of the hue/saturation wheel, derived once per layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Side length of the square wheel area, the smaller of width and height
    pub side: f32,
    /// Thumb diameter in pixels
    pub thumb_size: f32,
    /// Center coordinate on both axes, in the thumb-anchored frame
    pub center: f32,
    /// Wheel radius in pixels, never negative
    pub radius: f32,
}

impl WheelGeometry {
    /// Derive wheel geometry from a measured region and a thumb size.
    ///
    /// Regions smaller than the thumb collapse to a single point.
    pub fn new(width: f32, height: f32, thumb_size: f32) -> Self {
        let side = width.min(height);
        let center = ((side - thumb_size) / 2.0).max(0.0);
        Self {
            side,
            thumb_size,
            center,
            radius: center,
        }
    }

    /// The wheel center as a point.
    pub fn center_point(&self) -> Point {
        Point::new(self.center, self.center)
    }

    /// Thumb position for a hue/saturation pair, top-left anchored.
    ///
    /// The angle is negated on encode; the y-down mirror in
    /// `position_to_hue_saturation` restores it on decode.
    pub fn thumb_position_for(&self, hue: f32, saturation: f32) -> Point {
        let offset = to_cartesian(-hue, saturation * self.radius);
        Point::new(self.center + offset.x, self.center + offset.y)
    }

    /// Whether a gesture start position falls within the interactive band.
    ///
    /// The band extends beyond the visual circle by a fraction of the thumb
    /// size, forgiving imprecise starts near the rim. The start position is
    /// a raw gesture coordinate, so the compared center is shifted by half
    /// a thumb back into the raw frame.
    pub fn within_tolerance(&self, start: Point) -> bool {
        let half = self.thumb_size / 2.0;
        let hit_center = Point::new(self.center + half, self.center + half);
        distance(start, hit_center) <= self.radius + self.thumb_size / THUMB_TOLERANCE_DIVISOR
    }
}

/// Geometry of the value slider, derived once per layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// Track length in pixels along the drag axis
    pub track_length: f32,
    /// Thumb width in pixels
    pub thumb_size: f32,
}

impl SliderGeometry {
    /// Derive slider geometry from a measured track length and thumb size.
    pub fn new(track_length: f32, thumb_size: f32) -> Self {
        Self {
            track_length,
            thumb_size,
        }
    }

    /// Usable thumb travel in pixels, never negative.
    pub fn usable_travel(&self) -> f32 {
        (self.track_length - self.thumb_size).max(0.0)
    }

    /// Clamp a thumb position to the usable travel.
    pub fn clamp_travel(&self, position: f32) -> f32 {
        position.clamp(0.0, self.usable_travel())
    }

    /// Value in `[0, 1]` for a clamped thumb travel.
    ///
    /// Degenerate geometry (no usable travel) keeps the result finite by
    /// treating the denominator as 1.
    pub fn value_for(&self, travel: f32) -> f32 {
        let usable = self.usable_travel();
        if usable > 0.0 { travel / usable } else { travel }
    }

    /// Thumb position for a value in `[0, 1]`.
    pub fn thumb_position_for(&self, value: f32) -> f32 {
        self.usable_travel() * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;
    const HUE_EPSILON: f32 = 0.01;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_to_cartesian_axes() {
        let right = to_cartesian(0.0, 100.0);
        assert!(approx_eq(right.x, 100.0));
        assert!(approx_eq(right.y, 0.0));

        let down = to_cartesian(90.0, 100.0);
        assert!(approx_eq(down.x, 0.0));
        assert!(approx_eq(down.y, 100.0));

        let left = to_cartesian(180.0, 100.0);
        assert!(approx_eq(left.x, -100.0));
        assert!(approx_eq(left.y, 0.0));
    }

    #[test]
    fn test_distance() {
        let d = distance(Point::new(3.0, 4.0), Point::zero());
        assert!(approx_eq(d, 5.0));
        assert!(approx_eq(distance(Point::new(7.0, 7.0), Point::new(7.0, 7.0)), 0.0));
    }

    #[test]
    fn test_snap_inside_threshold_maps_to_center() {
        let center = Point::new(100.0, 100.0);
        let near = Point::new(103.0, 98.0);

        let snapped = snap_to_center(near, center, 10.0);
        assert_eq!(snapped, center);

        // Re-applying is a no-op.
        let again = snap_to_center(snapped, center, 10.0);
        assert_eq!(again, center);
    }

    #[test]
    fn test_snap_at_or_beyond_threshold_unchanged() {
        let center = Point::new(100.0, 100.0);

        // Exactly at the threshold: the comparison is strict.
        let at_threshold = Point::new(110.0, 100.0);
        assert_eq!(snap_to_center(at_threshold, center, 10.0), at_threshold);

        let outside = Point::new(150.0, 100.0);
        assert_eq!(snap_to_center(outside, center, 10.0), outside);
    }

    #[test]
    fn test_snap_zero_threshold_disables() {
        let center = Point::new(100.0, 100.0);
        let near = Point::new(100.5, 100.0);
        assert_eq!(snap_to_center(near, center, 0.0), near);
    }

    #[test]
    fn test_clamp_inside_unchanged() {
        let center = Point::new(100.0, 100.0);
        let inside = Point::new(130.0, 80.0);
        assert_eq!(clamp_to_circle(inside, center, 100.0), inside);
    }

    #[test]
    fn test_clamp_boundary_lands_on_circle_same_ray() {
        let center = Point::new(100.0, 100.0);
        let outside = Point::new(100.0 + 84.0, 100.0 + 112.0); // distance 140

        let clamped = clamp_to_circle(outside, center, 100.0);
        assert!(approx_eq(distance(clamped, center), 100.0));

        // Same ray: the clamped point is the outside point scaled toward center.
        assert!(approx_eq(clamped.x, 100.0 + 60.0));
        assert!(approx_eq(clamped.y, 100.0 + 80.0));
    }

    #[test]
    fn test_clamp_degenerate_radius() {
        let center = Point::new(100.0, 100.0);
        let p = Point::new(130.0, 100.0);

        let clamped = clamp_to_circle(p, center, 0.0);
        assert_eq!(clamped, center);

        // A point already at the center stays put without dividing by zero.
        assert_eq!(clamp_to_circle(center, center, 0.0), center);
    }

    #[test]
    fn test_decode_cardinal_directions() {
        let center = Point::new(100.0, 100.0);

        let (h, _) = position_to_hue_saturation(Point::new(150.0, 100.0), center, 100.0);
        assert!(approx_eq(h, 0.0));

        let (h, _) = position_to_hue_saturation(Point::new(100.0, 50.0), center, 100.0);
        assert!(approx_eq(h, 90.0));

        let (h, _) = position_to_hue_saturation(Point::new(50.0, 100.0), center, 100.0);
        assert!(approx_eq(h, 180.0));

        let (h, _) = position_to_hue_saturation(Point::new(100.0, 150.0), center, 100.0);
        assert!(approx_eq(h, 270.0));
    }

    #[test]
    fn test_decode_center_is_hue_zero() {
        let center = Point::new(100.0, 100.0);
        let (h, s) = position_to_hue_saturation(center, center, 100.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_decode_saturation_scales_with_distance() {
        let center = Point::new(100.0, 100.0);

        let (_, s) = position_to_hue_saturation(Point::new(125.0, 100.0), center, 100.0);
        assert!(approx_eq(s, 0.25));

        // Beyond the radius the saturation caps at 1.
        let (_, s) = position_to_hue_saturation(Point::new(260.0, 100.0), center, 100.0);
        assert!(approx_eq(s, 1.0));
    }

    #[test]
    fn test_decode_degenerate_radius_pins_saturation() {
        let center = Point::new(0.0, 0.0);
        let (_, s) = position_to_hue_saturation(Point::new(10.0, 0.0), center, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let wheel = WheelGeometry::new(250.0, 250.0, 50.0);
        let center = wheel.center_point();

        for &hue in &[0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 359.0] {
            for &saturation in &[0.25, 0.5, 1.0] {
                let pos = wheel.thumb_position_for(hue, saturation);
                let (h, s) = position_to_hue_saturation(pos, center, wheel.radius);
                assert!(
                    (h - hue).abs() < HUE_EPSILON,
                    "hue {hue} decoded as {h}"
                );
                assert!(
                    (s - saturation).abs() < EPSILON,
                    "saturation {saturation} decoded as {s}"
                );
            }
        }
    }

    #[test]
    fn test_zero_saturation_decodes_to_hue_zero() {
        // At saturation 0 every hue encodes to the center, which decodes to
        // hue 0 by definition.
        let wheel = WheelGeometry::new(250.0, 250.0, 50.0);
        let pos = wheel.thumb_position_for(212.0, 0.0);
        let (h, s) = position_to_hue_saturation(pos, wheel.center_point(), wheel.radius);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_wheel_geometry_from_layout() {
        let wheel = WheelGeometry::new(250.0, 300.0, 50.0);
        assert_eq!(wheel.side, 250.0);
        assert_eq!(wheel.center, 100.0);
        assert_eq!(wheel.radius, 100.0);
    }

    #[test]
    fn test_wheel_geometry_smaller_than_thumb() {
        let wheel = WheelGeometry::new(30.0, 30.0, 50.0);
        assert_eq!(wheel.center, 0.0);
        assert_eq!(wheel.radius, 0.0);
    }

    #[test]
    fn test_within_tolerance_band() {
        let wheel = WheelGeometry::new(250.0, 250.0, 50.0);

        // Dead center of the visual wheel, in raw coordinates.
        assert!(wheel.within_tolerance(Point::new(125.0, 125.0)));

        // Just inside the widened band (radius 100 plus 50/1.5).
        assert!(wheel.within_tolerance(Point::new(125.0 + 133.0, 125.0)));

        // Just outside it.
        assert!(!wheel.within_tolerance(Point::new(125.0 + 134.0, 125.0)));
    }

    #[test]
    fn test_slider_travel_and_value() {
        let slider = SliderGeometry::new(300.0, 50.0);
        assert_eq!(slider.usable_travel(), 250.0);

        assert_eq!(slider.clamp_travel(-10.0), 0.0);
        assert_eq!(slider.clamp_travel(125.0), 125.0);
        assert_eq!(slider.clamp_travel(400.0), 250.0);

        assert!(approx_eq(slider.value_for(125.0), 0.5));
        assert!(approx_eq(slider.thumb_position_for(0.5), 125.0));
    }

    #[test]
    fn test_slider_degenerate_travel() {
        let slider = SliderGeometry::new(40.0, 50.0);
        assert_eq!(slider.usable_travel(), 0.0);
        assert_eq!(slider.clamp_travel(30.0), 0.0);

        // No division by zero, and a pinned travel maps to value 0.
        let v = slider.value_for(slider.clamp_travel(30.0));
        assert_eq!(v, 0.0);
        assert!(v.is_finite());
    }
}

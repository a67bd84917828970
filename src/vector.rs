//! Degree-based polar helpers on top of [`glam::DVec2`].
//!
//! Arithmetic, length, distance and dot product come straight from glam.
//! Everything that talks about angles here works in degrees, with
//! headings normalized to `[0, 360)`.

use glam::DVec2;

pub trait Polar: Sized {
    /// Vector of length `magnitude` pointing at `angle` degrees.
    fn speed(angle: f64, magnitude: f64) -> Self;

    /// Direction in degrees, `[0, 360)`. The zero vector has heading 0.
    fn heading(self) -> f64;

    /// Heading of the vector from `self` to `other`.
    fn heading_to(self, other: Self) -> f64;

    /// Rotate by `angle` degrees, keeping the length.
    fn rotate_degrees(self, angle: f64) -> Self;

    /// Unit vector, or zero when the length is below machine epsilon
    /// or not finite.
    fn unit(self) -> Self;
}

impl Polar for DVec2 {
    fn speed(angle: f64, magnitude: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        DVec2::new(cos * magnitude, sin * magnitude)
    }

    fn heading(self) -> f64 {
        (self.y.atan2(self.x).to_degrees() + 360.0) % 360.0
    }

    fn heading_to(self, other: Self) -> f64 {
        (other - self).heading()
    }

    fn rotate_degrees(self, angle: f64) -> Self {
        DVec2::speed(self.heading() + angle, self.length())
    }

    fn unit(self) -> Self {
        let len = self.length();
        if len > f64::EPSILON && len.is_finite() {
            self / len
        } else {
            DVec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angular_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn unit_has_length_one_or_zero() {
        for v in [
            DVec2::new(3.0, 4.0),
            DVec2::new(-1e-3, 7.0),
            DVec2::new(1e6, -1e6),
            DVec2::ZERO,
        ] {
            let len = v.unit().length();
            if v == DVec2::ZERO {
                assert_eq!(len, 0.0);
            } else {
                assert!((len - 1.0).abs() < 1e-12, "{v:?} -> {len}");
            }
        }
    }

    #[test]
    fn unit_of_nan_is_zero() {
        assert_eq!(DVec2::new(f64::NAN, 1.0).unit(), DVec2::ZERO);
        assert_eq!(DVec2::new(f64::INFINITY, 0.0).unit(), DVec2::ZERO);
    }

    #[test]
    fn heading_is_normalized() {
        assert_eq!(DVec2::new(1.0, 0.0).heading(), 0.0);
        assert!((DVec2::new(0.0, 1.0).heading() - 90.0).abs() < 1e-12);
        assert!((DVec2::new(-1.0, 0.0).heading() - 180.0).abs() < 1e-12);
        assert!((DVec2::new(0.0, -1.0).heading() - 270.0).abs() < 1e-12);
        assert_eq!(DVec2::ZERO.heading(), 0.0);
    }

    #[test]
    fn speed_round_trips_through_heading() {
        let mut angle = 0.0;
        while angle < 360.0 {
            for magnitude in [0.5, 2.0, 13.9, 1e4] {
                let back = DVec2::speed(angle, magnitude).heading();
                assert!(
                    angular_gap(back, angle) < 1e-9,
                    "angle {angle} magnitude {magnitude} -> {back}"
                );
                assert!((0.0..360.0).contains(&back));
            }
            angle += 7.5;
        }
    }

    #[test]
    fn rotate_keeps_length() {
        let v = DVec2::new(1.0, 0.0).rotate_degrees(90.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);

        let w = DVec2::new(3.0, 4.0).rotate_degrees(-135.0);
        assert!((w.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn heading_to_points_from_self() {
        let a = DVec2::new(10.0, 10.0);
        let b = DVec2::new(10.0, 0.0);
        assert!((a.heading_to(b) - 270.0).abs() < 1e-12);
        assert!((b.heading_to(a) - 90.0).abs() < 1e-12);
    }
}

//! Scene geometry for renderers
//!
//! The core works in one dimension: distance along the slope from the wall.
//! Renderers need 2-D points, so this maps along-slope positions into a scene
//! frame with the wall foot at the origin, x to the right and y up. All
//! lengths are already scaled (pixels).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Incline triangle and helpers to place things on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneGeometry {
    /// Inclination (radians)
    pub angle: f64,
    /// Slope length (pixels)
    pub length: f64,
    /// Block edge (pixels)
    pub block_size: f64,
    /// Height of the wall drawn at the foot (pixels)
    pub wall_height: f64,
}

impl PlaneGeometry {
    pub fn from_config(config: &Config) -> Self {
        Self {
            angle: config.angle,
            length: config.length * config.scale,
            block_size: config.block_size * config.scale,
            wall_height: config.scale / 2.0,
        }
    }

    /// Unit vector pointing up the slope
    #[inline]
    pub fn along(&self) -> DVec2 {
        polar_to_cartesian(1.0, self.angle)
    }

    /// Unit vector perpendicular to the slope, away from the surface
    #[inline]
    pub fn normal(&self) -> DVec2 {
        self.along().perp()
    }

    /// Foot of the plane, where the wall stands
    pub fn foot(&self) -> DVec2 {
        DVec2::ZERO
    }

    /// Top of the slope
    pub fn summit(&self) -> DVec2 {
        polar_to_cartesian(self.length, self.angle)
    }

    /// Right-angle corner under the summit
    pub fn corner(&self) -> DVec2 {
        DVec2::new(self.summit().x, 0.0)
    }

    /// The plane as a triangle: foot, summit, corner
    pub fn triangle(&self) -> [DVec2; 3] {
        [self.foot(), self.summit(), self.corner()]
    }

    /// Wall segment at the foot, standing perpendicular to the slope
    pub fn wall(&self) -> [DVec2; 2] {
        [self.foot(), self.foot() + self.normal() * self.wall_height]
    }

    /// Point on the surface `position` pixels up the slope
    pub fn surface_point(&self, position: f64) -> DVec2 {
        self.along() * position
    }

    /// Corners of the block whose wall-side edge sits at `position`
    /// (counter-clockwise from the wall-side contact point)
    pub fn block_corners(&self, position: f64) -> [DVec2; 4] {
        let base = self.surface_point(position);
        let along = self.along() * self.block_size;
        let up = self.normal() * self.block_size;
        [base, base + along, base + along + up, base + up]
    }

    /// Center of the block, the anchor for velocity/acceleration arrows
    pub fn block_center(&self, position: f64) -> DVec2 {
        let [a, _, c, _] = self.block_corners(position);
        (a + c) / 2.0
    }

    /// Arrow for a signed along-slope quantity (velocity, acceleration)
    /// drawn from the block center: returns (tail, head)
    pub fn vector_arrow(&self, position: f64, magnitude: f64) -> (DVec2, DVec2) {
        let tail = self.block_center(position);
        (tail, tail + self.along() * magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_triangle_dimensions() {
        let plane = PlaneGeometry::from_config(&Config::default());
        let [foot, summit, corner] = plane.triangle();
        assert_eq!(foot, DVec2::ZERO);
        // 900 px slope at 30°
        assert!((summit.y - 450.0).abs() < 1e-9);
        assert!((summit.x - 900.0 * 30f64.to_radians().cos()).abs() < 1e-9);
        assert_eq!(corner.y, 0.0);
        assert_eq!(corner.x, summit.x);
    }

    #[test]
    fn test_wall_is_perpendicular() {
        let plane = PlaneGeometry::from_config(&Config::default());
        let [bottom, top] = plane.wall();
        let dir = (top - bottom).normalize();
        assert!(dir.dot(plane.along()).abs() < 1e-9);
        assert!(((top - bottom).length() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_block_at_top_touches_summit() {
        let config = Config::default();
        let plane = PlaneGeometry::from_config(&config);
        let corners = plane.block_corners(config.top_position());
        assert!(approx(corners[1], plane.summit()));
    }

    #[test]
    fn test_block_center_and_arrow() {
        let plane = PlaneGeometry::from_config(&Config::default());
        let center = plane.block_center(0.0);
        let expected = (plane.along() + plane.normal()) * 37.5;
        assert!(approx(center, expected));

        let (tail, head) = plane.vector_arrow(0.0, -20.0);
        assert!(approx(tail, center));
        assert!(approx(head - tail, plane.along() * -20.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        assert!(approx(polar_to_cartesian(2.0, FRAC_PI_2), DVec2::new(0.0, 2.0)));
    }
}

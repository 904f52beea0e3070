use std::f64::consts::PI;

use nalgebra::Point2;

use crate::kinematics::PlanarArm;
use crate::{Error, Result};

/// Boundary of the reachable end-effector region.
///
/// The reachable set of a two-link arm is an annulus centered at the base:
/// outer radius `l1 + l2`, inner radius `|l1 - l2|`. With equal link lengths
/// the inner ring collapses onto the origin and the workspace is a filled
/// disk.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WorkspaceBoundary {
    /// Points on the outer circle.
    pub outer: Vec<Point2<f64>>,
    /// Points on the inner circle.
    pub inner: Vec<Point2<f64>>,
}

impl PlanarArm {
    /// Sample both boundary rings.
    ///
    /// Each ring holds `samples` points at linearly spaced angles over
    /// `[0, 2π)`. At least 3 points are required for a polygon approximation
    /// of the circle.
    pub fn workspace_boundary(&self, samples: usize) -> Result<WorkspaceBoundary> {
        if samples < 3 {
            return Err(Error::InsufficientSamples(samples));
        }

        let ring = |radius: f64| -> Vec<Point2<f64>> {
            (0..samples)
                .map(|sample| {
                    let angle = (sample as f64 / samples as f64) * 2.0 * PI;

                    Point2::new(radius * angle.cos(), radius * angle.sin())
                })
                .collect()
        };

        Ok(WorkspaceBoundary {
            outer: ring(self.reach_max()),
            inner: ring(self.reach_min()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_insufficient_samples() {
        let arm = PlanarArm::new(1.0, 0.8).unwrap();

        assert_eq!(
            arm.workspace_boundary(2),
            Err(Error::InsufficientSamples(2))
        );
    }

    #[test]
    fn test_degenerate_inner_ring() {
        let arm = PlanarArm::new(1.0, 1.0).unwrap();

        let boundary = arm.workspace_boundary(4).unwrap();

        assert_eq!(boundary.outer.len(), 4);
        assert_eq!(boundary.inner.len(), 4);

        // Equal link lengths fold the inner circle onto the base.
        for point in &boundary.inner {
            assert!(point.coords.norm() < TOLERANCE);
        }

        // Outer points sit at angles 0, π/2, π and 3π/2 on the radius-2 circle.
        let expected = [(2.0, 0.0), (0.0, 2.0), (-2.0, 0.0), (0.0, -2.0)];
        for (point, (x, y)) in boundary.outer.iter().zip(expected) {
            assert!((point.x - x).abs() < TOLERANCE);
            assert!((point.y - y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_ring_radii() {
        let arm = PlanarArm::new(6.0, 2.97).unwrap();

        let boundary = arm.workspace_boundary(360).unwrap();

        for point in &boundary.outer {
            assert!((point.coords.norm() - 8.97).abs() < TOLERANCE);
        }
        for point in &boundary.inner {
            assert!((point.coords.norm() - 3.03).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_linear_angular_spacing() {
        let arm = PlanarArm::new(1.0, 0.8).unwrap();

        let boundary = arm.workspace_boundary(12).unwrap();

        let step = 2.0 * PI / 12.0;
        for (sample, point) in boundary.outer.iter().enumerate() {
            let angle = point.y.atan2(point.x).rem_euclid(2.0 * PI);
            let expected = (sample as f64 * step).rem_euclid(2.0 * PI);

            assert!(crate::geometry::shortest_rotation(angle - expected).abs() < TOLERANCE);
        }
    }
}

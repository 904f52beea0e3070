use nalgebra::{Point2, Vector2};

use crate::chain::{Chain, Link};
use crate::{Error, Result};

/// Position of the moving parts of the arm for one joint configuration.
///
/// The base is always at the origin. A pose is a value computed per call and
/// never cached on the arm.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Pose {
    /// Elbow position, end of link 1.
    pub elbow: Point2<f64>,
    /// End-effector position, end of link 2.
    pub effector: Point2<f64>,
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Elbow [{:.2}, {:.2}]; Effector [{:.2}, {:.2}]",
            self.elbow.x, self.elbow.y, self.effector.x, self.effector.y
        )
    }
}

/// Two-link planar arm with a shoulder and an elbow joint.
///
/// Link lengths are fixed at construction. The shoulder angle is absolute,
/// measured from the positive X axis; the elbow angle is relative to the
/// direction of link 1. All angles are in radians and unconstrained, the
/// pose is periodic in both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarArm {
    l1: f64,
    l2: f64,
}

impl PlanarArm {
    /// Construct a new arm. Both link lengths must be strictly positive.
    pub fn new(l1: f64, l2: f64) -> Result<Self> {
        if l1 <= 0.0 {
            return Err(Error::InvalidLinkLength(l1));
        }
        if l2 <= 0.0 {
            return Err(Error::InvalidLinkLength(l2));
        }

        Ok(Self { l1, l2 })
    }

    #[inline]
    pub fn l1(&self) -> f64 {
        self.l1
    }

    #[inline]
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Maximum reach of the effector, the outer workspace radius.
    #[inline]
    pub fn reach_max(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Minimum reach of the effector, the inner workspace radius.
    #[inline]
    pub fn reach_min(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }

    /// Solve the pose with direct angle-sum trigonometry.
    pub fn pose(&self, theta_1: f64, theta_2: f64) -> Pose {
        let elbow = Point2::new(self.l1 * theta_1.cos(), self.l1 * theta_1.sin());

        let effector = elbow
            + Vector2::new(
                self.l2 * (theta_1 + theta_2).cos(),
                self.l2 * (theta_1 + theta_2).sin(),
            );

        Pose { elbow, effector }
    }

    /// Equivalent link chain of the arm, joint angles unset.
    pub fn chain(&self) -> Chain {
        Chain::new()
            .add_link(Link::new("shoulder", self.l1))
            .add_link(Link::new("elbow", self.l2))
    }

    /// Solve the pose by composing rigid 2D transforms along a link chain.
    ///
    /// Agrees with [`PlanarArm::pose`] within floating point tolerance. The
    /// chain formulation carries over unchanged to arms with more joints.
    pub fn pose_from_chain(&self, theta_1: f64, theta_2: f64) -> Pose {
        let mut chain = self.chain();

        chain.set_joint_position("shoulder", theta_1);
        chain.set_joint_position("elbow", theta_2);

        Pose {
            elbow: chain.transformation_until("shoulder") * Point2::origin(),
            effector: chain.effector_point(),
        }
    }
}

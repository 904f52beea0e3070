use nalgebra::{Isometry2, Point2};

/// A rigid link driven by a revolute joint at its base.
pub struct Link {
    name: String,
    length: f64,
}

impl Link {
    /// Construct a new link.
    pub fn new(name: impl ToString, length: f64) -> Self {
        Self {
            name: name.to_string(),
            length,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rest transform of the link: a pure translation along its axis.
    #[inline]
    pub fn origin(&self) -> Isometry2<f64> {
        Isometry2::translation(self.length, 0.0)
    }

    /// Local transform for a joint angle: rotate about the joint, then
    /// translate along the link towards the next joint.
    pub fn transform(&self, angle: f64) -> Isometry2<f64> {
        Isometry2::rotation(angle) * self.origin()
    }
}

/// Open kinematic chain of planar links.
///
/// The world transformation is the left-to-right product of the link
/// transforms, base to effector. Links with no joint angle set contribute
/// their rest transform only.
pub struct Chain {
    links: Vec<Link>,
    joint_state: Vec<(String, Option<f64>)>,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            links: vec![],
            joint_state: vec![],
        }
    }

    pub fn add_link(mut self, link: Link) -> Self {
        self.joint_state.push((link.name().to_string(), None));
        self.links.push(link);
        self
    }

    pub fn is_ready(&self) -> bool {
        self.joint_state.iter().all(|(_, angle)| angle.is_some())
    }

    pub fn reset(&mut self) {
        for (_, angle) in &mut self.joint_state {
            *angle = None;
        }
    }

    pub fn set_joint_position(&mut self, name: impl ToString, angle: f64) {
        self.joint_state
            .iter_mut()
            .find(|(joint_name, _)| joint_name == &name.to_string())
            .unwrap()
            .1 = Some(angle);
    }

    pub fn set_joint_positions(&mut self, angles: Vec<f64>) {
        for ((_, state), angle) in self.joint_state.iter_mut().zip(angles) {
            *state = Some(angle);
        }
    }

    pub fn transformation_until(&self, end_link_name: impl ToString) -> Isometry2<f64> {
        let mut pose = Isometry2::identity();

        for (link, (link_name, angle)) in self.links.iter().zip(&self.joint_state) {
            if let Some(angle) = angle {
                pose = pose * link.transform(*angle);
            } else {
                pose = pose * link.origin();
            }

            if link_name == &end_link_name.to_string() {
                break;
            }
        }

        pose
    }

    pub fn world_transformation(&self) -> Isometry2<f64> {
        let mut pose = Isometry2::identity();

        for (link, (_, angle)) in self.links.iter().zip(&self.joint_state) {
            if let Some(angle) = angle {
                pose = pose * link.transform(*angle);
            } else {
                pose = pose * link.origin();
            }
        }

        pose
    }

    pub fn effector_point(&self) -> Point2<f64> {
        self.world_transformation() * Point2::origin()
    }

    /// Position of every joint from base to effector, in order. The first
    /// point is always the base at the origin.
    pub fn joint_points(&self) -> Vec<Point2<f64>> {
        let mut points = vec![Point2::origin()];

        let mut pose = Isometry2::identity();
        for (link, (_, angle)) in self.links.iter().zip(&self.joint_state) {
            if let Some(angle) = angle {
                pose = pose * link.transform(*angle);
            } else {
                pose = pose * link.origin();
            }

            points.push(pose * Point2::origin());
        }

        points
    }

    /// Distance between the effector points of two chains.
    pub fn distance(&self, rhs: &Self) -> f64 {
        nalgebra::distance(&self.effector_point(), &rhs.effector_point())
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let point = self.effector_point();

        write!(f, "[{:.2}, {:.2}]", point.x, point.y)
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let point = self.effector_point();

        let mut s = String::new();

        for (link_name, angle) in &self.joint_state {
            let angle = angle.unwrap_or(0.0);

            s.push_str(&format!(
                "{}={:.2}rad/{:5.2}° ",
                link_name,
                angle,
                angle.to_degrees()
            ));
        }

        write!(f, "{s} Endpoint [{:.2}, {:.2}]", point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_rest_transform() {
        let chain = Chain::new()
            .add_link(Link::new("shoulder", 1.0))
            .add_link(Link::new("elbow", 0.8));

        assert!(!chain.is_ready());

        let point = chain.effector_point();
        assert!((point.x - 1.8).abs() < TOLERANCE);
        assert!(point.y.abs() < TOLERANCE);
    }

    #[test]
    fn test_transformation_until() {
        let mut chain = Chain::new()
            .add_link(Link::new("shoulder", 1.0))
            .add_link(Link::new("elbow", 0.8));

        chain.set_joint_position("shoulder", std::f64::consts::FRAC_PI_2);
        chain.set_joint_position("elbow", 0.0);

        let elbow = chain.transformation_until("shoulder") * Point2::origin();
        assert!(elbow.x.abs() < TOLERANCE);
        assert!((elbow.y - 1.0).abs() < TOLERANCE);

        let effector = chain.effector_point();
        assert!(effector.x.abs() < TOLERANCE);
        assert!((effector.y - 1.8).abs() < TOLERANCE);
    }

    #[test]
    fn test_three_link_angle_sum() {
        // A third link folds into the same angle-sum expression as the
        // two-link arm: x = Σ l_i * cos(θ_1 + .. + θ_i).
        let (l1, l2, l3) = (4.0, 3.0, 2.0);
        let (t1, t2, t3) = (
            45.0_f64.to_radians(),
            30.0_f64.to_radians(),
            15.0_f64.to_radians(),
        );

        let mut chain = Chain::new()
            .add_link(Link::new("shoulder", l1))
            .add_link(Link::new("elbow", l2))
            .add_link(Link::new("wrist", l3));

        chain.set_joint_positions(vec![t1, t2, t3]);
        assert!(chain.is_ready());

        let expected_x = l1 * t1.cos() + l2 * (t1 + t2).cos() + l3 * (t1 + t2 + t3).cos();
        let expected_y = l1 * t1.sin() + l2 * (t1 + t2).sin() + l3 * (t1 + t2 + t3).sin();

        let point = chain.effector_point();
        assert!((point.x - expected_x).abs() < TOLERANCE);
        assert!((point.y - expected_y).abs() < TOLERANCE);
    }

    #[test]
    fn test_joint_points() {
        let mut chain = Chain::new()
            .add_link(Link::new("shoulder", 1.0))
            .add_link(Link::new("elbow", 0.8));

        chain.set_joint_positions(vec![0.0, 0.0]);

        let points = chain.joint_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point2::origin());
        assert!((points[1].x - 1.0).abs() < TOLERANCE);
        assert!((points[2].x - 1.8).abs() < TOLERANCE);
    }

    #[test]
    fn test_distance() {
        let mut stretched = Chain::new()
            .add_link(Link::new("shoulder", 1.0))
            .add_link(Link::new("elbow", 0.8));
        stretched.set_joint_positions(vec![0.0, 0.0]);

        let mut folded = Chain::new()
            .add_link(Link::new("shoulder", 1.0))
            .add_link(Link::new("elbow", 0.8));
        folded.set_joint_positions(vec![0.0, std::f64::consts::PI]);

        // Effectors sit at (1.8, 0) and (0.2, 0).
        assert!((stretched.distance(&folded) - 1.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_reset() {
        let mut chain = Chain::new().add_link(Link::new("shoulder", 1.0));

        chain.set_joint_position("shoulder", 1.0);
        assert!(chain.is_ready());

        chain.reset();
        assert!(!chain.is_ready());
    }
}

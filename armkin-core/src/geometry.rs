use std::f64::consts::PI;

/// Calculate the shortest rotation between two points on a circle
pub fn shortest_rotation(distance: f64) -> f64 {
    let dist_normal = (distance + (2.0 * PI)) % (2.0 * PI);

    if dist_normal > PI {
        dist_normal - (2.0 * PI)
    } else {
        dist_normal
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_rotation() {
        assert!(shortest_rotation(45.0_f64.to_radians()) < 46.0_f64.to_radians());
        assert!(shortest_rotation(179.0_f64.to_radians()) < 180.0_f64.to_radians());
        assert!(shortest_rotation(270.0_f64.to_radians()) < 0.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-2.0, 2.0, 0.75), 1.0);
    }
}

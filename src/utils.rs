/// Math constants
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON;
    pub const TAU: f32 = std::f32::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Tolerance-based float comparisons
pub mod comparison {
    use super::constants::EPSILON;

    /// Checks whether two floats are (nearly) equal
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Checks whether two floats are equal within a custom tolerance
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Checks whether a float is (nearly) zero
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }
}

/// Random point generators (extends the rand crate for 2D use)
pub mod random {
    use crate::utils::constants::TAU;
    use glam::Vec2;
    use rand::Rng;

    /// Generates a random point inside a rectangle
    pub fn random_point_in_rect(min: Vec2, max: Vec2, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }

    /// Generates a random point inside a circle (uniformly distributed)
    pub fn random_point_in_circle(center: Vec2, radius: f32, rng: &mut impl Rng) -> Vec2 {
        let angle = rng.random_range(0.0..TAU);
        let r = radius * rng.random::<f32>().sqrt();
        Vec2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0, 1.0 + 1e-8));
        assert!(!nearly_equal(1.0, 1.001));
        assert!(nearly_zero(-1e-9));
        assert!(nearly_equal_eps(1.0, 1.4, 0.5));
    }
}

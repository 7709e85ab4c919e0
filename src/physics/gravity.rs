use nalgebra::Vector2;

/// Gravitational acceleration magnitude, m/s^2 (constant, no altitude falloff).
pub const G: f64 = 9.81;

/// Uniform gravity acceleration in the launch plane (x downrange, y up).
pub fn gravity_accel() -> Vector2<f64> {
    Vector2::new(0.0, -G)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_points_down() {
        let g = gravity_accel();
        assert_eq!(g.x, 0.0);
        assert_eq!(g.y, -G);
    }
}

use nalgebra::Vector2;

/// Quadratic drag force magnitude `k * v^2`, with `k = 0.5 * rho * Cd * A`
/// already folded into `drag_factor`.
pub fn drag_force(speed: f64, drag_factor: f64) -> f64 {
    drag_factor * (speed * speed)
}

/// Drag acceleration opposing `vel`, for a body of `mass` kg.
///
/// At zero speed the direction is undefined and no drag is applied.
/// Components are computed as `-drag * v_i / (mass * speed)` so results
/// stay bit-identical for a given step size.
pub fn drag_accel(vel: &Vector2<f64>, speed: f64, drag: f64, mass: f64) -> Vector2<f64> {
    if speed > 0.0 {
        Vector2::new(
            -drag * vel.x / (mass * speed),
            -drag * vel.y / (mass * speed),
        )
    } else {
        Vector2::zeros()
    }
}

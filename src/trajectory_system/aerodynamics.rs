use crate::{constants::MIN_SPEED, control::environment::Environment, utils::vector2d::Vector2D};

/// Quadratic drag magnitude, ½·ρ·Cd·A·v².
pub fn drag_force(air_density: f64, drag_coefficient: f64, reference_area: f64, speed: f64) -> f64 {
    0.5 * air_density * drag_coefficient * reference_area * speed.powi(2)
}

#[derive(Debug, Clone)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub enabled: bool,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reference_area: f64, enabled: bool) -> Self {
        Aerodynamics {
            drag_coefficient,
            reference_area,
            enabled,
        }
    }

    pub fn calculate_drag_magnitude(&self, speed: f64, environment: &Environment) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        drag_force(
            environment.air_density,
            self.drag_coefficient,
            self.reference_area,
            speed,
        )
    }

    /// Drag along the reversed velocity, returned with its magnitude. The speed
    /// used as divisor is floored so a momentarily motionless body yields a
    /// zero vector instead of NaN.
    pub fn calculate_drag(&self, velocity: Vector2D, environment: &Environment) -> (Vector2D, f64) {
        let speed = velocity.magnitude().max(MIN_SPEED);
        let drag_magnitude = self.calculate_drag_magnitude(speed, environment);

        (-velocity * (drag_magnitude / speed), drag_magnitude)
    }
}

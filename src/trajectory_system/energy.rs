//! Energy bookkeeping shared by both scenarios.

/// Gravitational potential energy relative to the ground, m·g·h.
pub fn potential_energy(mass: f64, gravity: f64, altitude: f64) -> f64 {
    mass * gravity * altitude
}

/// Kinetic energy for a speed of any dimensionality, ½·m·v².
pub fn kinetic_energy(mass: f64, speed: f64) -> f64 {
    0.5 * mass * speed.powi(2)
}

/// Rate at which drag turns mechanical energy into heat.
pub fn drag_power(drag_force: f64, speed: f64) -> f64 {
    drag_force * speed.abs()
}

/// Left-rectangle accumulation of dissipated heat.
///
/// The drag force and speed passed in must both be sampled at the start of
/// the interval; the running total therefore never decreases.
#[derive(Debug, Clone, Copy, Default)]
pub struct DissipationMeter {
    total: f64,
}

impl DissipationMeter {
    pub fn new() -> Self {
        DissipationMeter { total: 0.0 }
    }

    pub fn accumulate(&mut self, drag_force: f64, speed: f64, delta_time: f64) {
        self.total += drag_power(drag_force, speed) * delta_time;
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

use crate::{
    constants::MIN_SPEED,
    control::{
        configuration::{Configuration, Scenario},
        environment::Environment,
    },
    telemetry_system::telemetry::{RunSummary, Sample, Telemetry, TerminalCondition},
    utils::vector2d::Vector2D,
};

use super::{
    aerodynamics::Aerodynamics,
    energy::{kinetic_energy, potential_energy, DissipationMeter},
    integrator::{Integrator, SimulationLimits},
};

/// Launch speed from the spring energy, zero when there is nothing to release.
pub fn launch_speed(elastic_energy: f64, mass: f64) -> f64 {
    if elastic_energy <= 0.0 || mass <= 0.0 {
        0.0
    } else {
        (2.0 * elastic_energy / mass).sqrt()
    }
}

/// Spring-catapult projectile launched from the origin.
#[derive(Debug)]
pub struct LaunchKinematics {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub time: f64,
    pub steps: usize,
    mass: f64,
    time_step: f64,
    initial_energy: f64,
    aerodynamics: Aerodynamics,
    environment: Environment,
    dissipation: DissipationMeter,
    telemetry: Telemetry,
}

impl LaunchKinematics {
    pub fn new(config: &Configuration) -> Self {
        let launch_angle_rad = config.launch.angle.to_radians();
        let initial_energy = config.launch.elastic_energy();
        let speed = launch_speed(initial_energy, config.mass);

        LaunchKinematics {
            position: Vector2D::new(0.0, 0.0),
            velocity: Vector2D::new(
                speed * launch_angle_rad.cos(),
                speed * launch_angle_rad.sin(),
            ),
            time: 0.0,
            steps: 0,
            mass: config.mass,
            time_step: config.time_step,
            initial_energy,
            aerodynamics: Aerodynamics::new(
                config.drag_coefficient,
                config.reference_area,
                config.drag_enabled,
            ),
            environment: Environment::new(
                config.sea_level_density,
                config.scale_height,
                config.gravity_model,
            ),
            dissipation: DissipationMeter::new(),
            telemetry: Telemetry::new(true, 0.0),
        }
    }

    pub fn get_velocity_magnitude(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}

impl Integrator for LaunchKinematics {
    fn step(&mut self) {
        let delta_time = self.time_step;
        self.environment.update(self.position.y);

        let speed = self.velocity.magnitude().max(MIN_SPEED);
        let (drag, drag_magnitude) = self.aerodynamics.calculate_drag(self.velocity, &self.environment);

        let acceleration =
            Vector2D::new(0.0, -self.environment.gravity) + drag / self.mass;

        self.velocity = self.velocity + acceleration * delta_time;
        self.position = self.position + self.velocity * delta_time;
        self.position.y = self.position.y.max(0.0);

        self.dissipation.accumulate(drag_magnitude, speed, delta_time);

        self.time += delta_time;
        self.steps += 1;
        let current_speed = self.velocity.magnitude();
        self.telemetry.collect(Sample {
            time: self.time,
            potential_energy: potential_energy(
                self.mass,
                self.environment.gravity,
                self.position.y,
            ),
            kinetic_energy: kinetic_energy(self.mass, current_speed),
            dissipated_energy: self.dissipation.total(),
            speed: current_speed,
            altitude: self.position.y,
            horizontal_position: Some(self.position.x),
        });
    }

    fn is_terminal(&self, limits: &SimulationLimits) -> Option<TerminalCondition> {
        let landed = self.steps > 0 && self.position.y <= 0.0 && self.velocity.y < 0.0;
        if landed {
            Some(TerminalCondition::GroundReached)
        } else if self.time >= limits.time_ceiling {
            Some(TerminalCondition::TimeCeiling)
        } else if self.steps >= limits.max_steps {
            Some(TerminalCondition::StepCeiling)
        } else {
            None
        }
    }

    fn summarize(self, terminal: TerminalCondition) -> RunSummary {
        let terminal_speed = self.get_velocity_magnitude();
        self.telemetry.into_summary(
            Scenario::Launch,
            terminal,
            self.time,
            terminal_speed,
            self.initial_energy,
        )
    }
}

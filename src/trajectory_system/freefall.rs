use crate::{
    control::{
        configuration::{Configuration, Scenario},
        environment::Environment,
    },
    telemetry_system::telemetry::{RunSummary, Sample, Telemetry, TerminalCondition},
};

use super::{
    aerodynamics::Aerodynamics,
    energy::{kinetic_energy, potential_energy, DissipationMeter},
    integrator::{Integrator, SimulationLimits},
};

/// Vertical drop. `speed` is positive downwards.
#[derive(Debug)]
pub struct FreefallKinematics {
    pub altitude: f64,
    pub speed: f64,
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

impl FreefallKinematics {
    pub fn new(config: &Configuration) -> Self {
        let mut environment = Environment::new(
            config.sea_level_density,
            config.scale_height,
            config.gravity_model,
        );
        environment.update(config.initial_altitude);
        let initial_energy =
            potential_energy(config.mass, environment.gravity, config.initial_altitude);

        FreefallKinematics {
            altitude: config.initial_altitude,
            speed: 0.0,
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
            environment,
            dissipation: DissipationMeter::new(),
            telemetry: Telemetry::new(false, config.initial_altitude),
        }
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}

fn direction(speed: f64) -> f64 {
    if speed > 0.0 {
        1.0
    } else if speed < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Integrator for FreefallKinematics {
    fn step(&mut self) {
        let delta_time = self.time_step;
        self.environment.update(self.altitude);
        let gravity = self.environment.gravity;

        let weight = self.mass * gravity;
        let drag = self
            .aerodynamics
            .calculate_drag_magnitude(self.speed, &self.environment);
        let acceleration = (weight - drag * direction(self.speed)) / self.mass;

        // Position follows the mean of the old and new speed
        let next_speed = self.speed + acceleration * delta_time;
        let next_altitude =
            (self.altitude - 0.5 * (self.speed + next_speed) * delta_time).max(0.0);

        // Heat uses the speed at the start of the step
        self.dissipation.accumulate(drag, self.speed, delta_time);

        self.time += delta_time;
        self.steps += 1;
        self.telemetry.collect(Sample {
            time: self.time,
            potential_energy: potential_energy(self.mass, gravity, next_altitude),
            kinetic_energy: kinetic_energy(self.mass, next_speed),
            dissipated_energy: self.dissipation.total(),
            speed: next_speed.abs(),
            altitude: next_altitude,
            horizontal_position: None,
        });

        self.speed = next_speed;
        self.altitude = next_altitude;
    }

    fn is_terminal(&self, limits: &SimulationLimits) -> Option<TerminalCondition> {
        if self.altitude <= 0.0 {
            Some(TerminalCondition::GroundReached)
        } else if self.time >= limits.time_ceiling || self.time > limits.hard_stop {
            Some(TerminalCondition::TimeCeiling)
        } else if self.steps >= limits.max_steps {
            Some(TerminalCondition::StepCeiling)
        } else {
            None
        }
    }

    fn summarize(self, terminal: TerminalCondition) -> RunSummary {
        self.telemetry.into_summary(
            Scenario::Freefall,
            terminal,
            self.time,
            self.speed.abs(),
            self.initial_energy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::environment::GravityModel;
    use crate::trajectory_system::integrator::integrate;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn vacuum_drop(initial_altitude: f64, time_step: f64) -> Configuration {
        Configuration {
            mass: 10.0,
            initial_altitude,
            time_step,
            drag_enabled: false,
            gravity_model: GravityModel::Simplified,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let kinematics = FreefallKinematics::new(&vacuum_drop(100.0, 0.1));
        assert_eq!(kinematics.altitude, 100.0);
        assert_eq!(kinematics.speed, 0.0);
        assert_eq!(kinematics.time, 0.0);
        assert!(kinematics.telemetry().series().is_empty());
    }

    #[test]
    fn test_single_step_matches_constant_acceleration() {
        let mut kinematics = FreefallKinematics::new(&vacuum_drop(100.0, 0.1));
        kinematics.step();

        assert_relative_eq!(kinematics.speed, 1.0, epsilon = 1e-12);
        // Averaged velocity makes the position exact under constant gravity
        assert_relative_eq!(kinematics.altitude, 100.0 - 0.5 * 10.0 * 0.01, epsilon = 1e-12);
        assert_relative_eq!(kinematics.time, 0.1, epsilon = 1e-12);

        let sample = kinematics.telemetry().series().sample(0).unwrap();
        assert_relative_eq!(sample.kinetic_energy, 5.0, epsilon = 1e-9);
        assert_relative_eq!(sample.potential_energy, 10.0 * 10.0 * 99.95, epsilon = 1e-9);
        assert_eq!(sample.dissipated_energy, 0.0);
    }

    #[test]
    fn test_drag_slows_the_fall() {
        let mut config = vacuum_drop(1_000.0, 0.05);
        config.drag_enabled = true;
        config.drag_coefficient = 1.0;
        config.reference_area = 1.0;

        let with_drag = integrate(FreefallKinematics::new(&config), &SimulationLimits::default());
        let without_drag = integrate(
            FreefallKinematics::new(&config.without_drag()),
            &SimulationLimits::default(),
        );

        assert!(with_drag.terminal_speed < without_drag.terminal_speed);
        assert!(with_drag.terminal_time > without_drag.terminal_time);
        assert!(with_drag.total_dissipated > 0.0);
        assert_eq!(without_drag.total_dissipated, 0.0);
    }

    #[test]
    fn test_terminal_velocity_is_approached() {
        let mut config = vacuum_drop(3_000.0, 0.01);
        config.mass = 80.0;
        config.drag_enabled = true;
        config.drag_coefficient = 1.0;
        config.reference_area = 0.5;
        config.scale_height = 1e12; // effectively uniform air

        let summary = integrate(FreefallKinematics::new(&config), &SimulationLimits::default());
        let terminal: f64 = (2.0_f64 * 80.0 * 10.0 / (1.225 * 1.0 * 0.5)).sqrt();

        assert_eq!(summary.terminal, TerminalCondition::GroundReached);
        assert_relative_eq!(summary.terminal_speed, terminal, max_relative = 1e-3);
        assert!(summary.max_speed <= terminal + 1e-6);
    }

    #[test]
    fn test_altitude_never_negative() {
        let summary = integrate(
            FreefallKinematics::new(&vacuum_drop(7.3, 0.3)),
            &SimulationLimits::default(),
        );
        assert!(summary.series.altitude.iter().all(|&h| h >= 0.0));
        assert_eq!(summary.series.altitude.last().copied(), Some(0.0));
    }

    #[test]
    fn test_ground_start_records_nothing() {
        let summary = integrate(
            FreefallKinematics::new(&vacuum_drop(0.0, 0.1)),
            &SimulationLimits::default(),
        );
        assert_eq!(summary.terminal, TerminalCondition::GroundReached);
        assert!(summary.series.is_empty());
        assert_eq!(summary.terminal_time, 0.0);
        assert_eq!(summary.terminal_speed, 0.0);
    }

    #[test]
    fn test_time_ceiling_takes_effect() {
        let limits = SimulationLimits {
            time_ceiling: 1.0,
            ..SimulationLimits::default()
        };
        let summary = integrate(FreefallKinematics::new(&vacuum_drop(10_000.0, 0.125)), &limits);

        assert_eq!(summary.terminal, TerminalCondition::TimeCeiling);
        assert_abs_diff_eq!(summary.terminal_time, 1.0, epsilon = 1e-9);
        assert!(summary.series.altitude.last().copied().unwrap() > 0.0);
    }

    #[test]
    fn test_hard_stop_applies_beyond_ceiling() {
        let limits = SimulationLimits {
            time_ceiling: f64::INFINITY,
            hard_stop: 2.0,
            max_steps: usize::MAX,
        };
        let summary = integrate(FreefallKinematics::new(&vacuum_drop(10_000.0, 0.5)), &limits);

        assert_eq!(summary.terminal, TerminalCondition::TimeCeiling);
        assert_abs_diff_eq!(summary.terminal_time, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_time_step_hits_step_ceiling() {
        let limits = SimulationLimits {
            max_steps: 500,
            ..SimulationLimits::default()
        };
        let summary = integrate(FreefallKinematics::new(&vacuum_drop(100.0, 0.0)), &limits);

        assert_eq!(summary.terminal, TerminalCondition::StepCeiling);
        assert_eq!(summary.steps, 500);
    }

    #[test]
    fn test_zero_mass_is_not_rejected() {
        let mut config = vacuum_drop(100.0, 0.1);
        config.mass = 0.0;

        let summary = integrate(FreefallKinematics::new(&config), &SimulationLimits::default());

        // NaN acceleration lands the body immediately via the altitude clamp
        assert_eq!(summary.steps, 1);
        assert!(summary.series.speed[0].is_nan());
    }
}

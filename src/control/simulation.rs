use tracing::debug;

use crate::constants::{GRAVITY_AVERAGE_SUBINTERVALS, SIMPLIFIED_GRAVITY};
use crate::control::configuration::{Configuration, Scenario};
use crate::control::environment::{gravity, GravityModel};
use crate::telemetry_system::telemetry::RunSummary;
use crate::trajectory_system::{
    freefall::FreefallKinematics,
    integrator::{integrate, SimulationLimits},
    launch::LaunchKinematics,
};

/// A run and the same run in vacuum for overlaying. When drag was already
/// off the two are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRun {
    pub primary: RunSummary,
    pub without_drag: RunSummary,
}

pub fn simulate(config: &Configuration) -> RunSummary {
    simulate_with_limits(config, &SimulationLimits::default())
}

pub fn simulate_with_limits(config: &Configuration, limits: &SimulationLimits) -> RunSummary {
    debug!(
        "Starting {} run: mass={} kg, dt={} s, drag={}, gravity={}",
        config.scenario, config.mass, config.time_step, config.drag_enabled, config.gravity_model
    );

    match config.scenario {
        Scenario::Freefall => integrate(FreefallKinematics::new(config), limits),
        Scenario::Launch => integrate(LaunchKinematics::new(config), limits),
    }
}

pub fn simulate_comparison(config: &Configuration) -> ComparisonRun {
    simulate_comparison_with_limits(config, &SimulationLimits::default())
}

pub fn simulate_comparison_with_limits(
    config: &Configuration,
    limits: &SimulationLimits,
) -> ComparisonRun {
    let primary = simulate_with_limits(config, limits);
    let without_drag = simulate_with_limits(&config.without_drag(), limits);

    ComparisonRun {
        primary,
        without_drag,
    }
}

/// Energy available at the top of the drop, for display.
///
/// The realistic model averages gravity over the column with a midpoint sum,
/// independent of the stepwise series.
pub fn initial_potential_energy(mass: f64, initial_altitude: f64, model: GravityModel) -> f64 {
    match model {
        GravityModel::Simplified => mass * SIMPLIFIED_GRAVITY * initial_altitude,
        GravityModel::Realistic => {
            let subintervals = GRAVITY_AVERAGE_SUBINTERVALS;
            let width = initial_altitude / subintervals as f64;
            let total: f64 = (0..subintervals)
                .map(|i| gravity((i as f64 + 0.5) * width, model))
                .sum();
            let mean_gravity = total / subintervals as f64;
            mass * mean_gravity * initial_altitude
        }
    }
}

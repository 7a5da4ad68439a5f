use tracing::{info, warn};

use crate::constants::{HARD_STOP_TIME, MAX_INTEGRATION_STEPS, MAX_SIMULATION_TIME};
use crate::telemetry_system::telemetry::{RunSummary, TerminalCondition};

/// Safety net against pathological input: a run ends on whichever limit it
/// reaches first, even if the body never lands.
///
/// `max_steps` only binds first for a time step below
/// [`SimulationLimits::min_time_step`], which `Configuration::validate` rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationLimits {
    pub time_ceiling: f64,
    pub hard_stop: f64,
    pub max_steps: usize,
}

impl Default for SimulationLimits {
    fn default() -> Self {
        SimulationLimits {
            time_ceiling: MAX_SIMULATION_TIME,
            hard_stop: HARD_STOP_TIME,
            max_steps: MAX_INTEGRATION_STEPS,
        }
    }
}

impl SimulationLimits {
    /// Smallest time step that reaches `time_ceiling` with a step to spare
    /// before `max_steps` runs out.
    pub fn min_time_step(&self) -> f64 {
        let spare = self.max_steps.saturating_sub(1).max(1);
        self.time_ceiling / spare as f64
    }
}

/// One scenario's stepping rule.
pub trait Integrator {
    /// Advance the state by one time step and record a sample.
    fn step(&mut self);

    /// `Some` once the run must stop.
    fn is_terminal(&self, limits: &SimulationLimits) -> Option<TerminalCondition>;

    fn summarize(self, terminal: TerminalCondition) -> RunSummary;
}

/// Drive an integrator until it reports a terminal condition.
pub fn integrate<I: Integrator>(mut integrator: I, limits: &SimulationLimits) -> RunSummary {
    let terminal = loop {
        if let Some(terminal) = integrator.is_terminal(limits) {
            break terminal;
        }
        integrator.step();
    };

    let summary = integrator.summarize(terminal);
    if terminal.is_ceiling() {
        warn!(
            "{} run stopped early: {} at t={:.2}s after {} steps",
            summary.scenario, terminal, summary.terminal_time, summary.steps
        );
    } else {
        info!(
            "{} run reached the ground at t={:.2}s, speed {:.2} m/s",
            summary.scenario, summary.terminal_time, summary.terminal_speed
        );
    }
    summary
}

use std::fmt;

use crate::control::configuration::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCondition {
    GroundReached,
    TimeCeiling,
    StepCeiling,
}

impl TerminalCondition {
    /// True when the run was cut short by a safety limit rather than landing.
    pub fn is_ceiling(&self) -> bool {
        !matches!(self, TerminalCondition::GroundReached)
    }
}

impl fmt::Display for TerminalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalCondition::GroundReached => write!(f, "ground reached"),
            TerminalCondition::TimeCeiling => write!(f, "time budget exhausted"),
            TerminalCondition::StepCeiling => write!(f, "step budget exhausted"),
        }
    }
}

/// One row of the time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub potential_energy: f64,
    pub kinetic_energy: f64,
    pub dissipated_energy: f64,
    pub speed: f64,
    pub altitude: f64,
    pub horizontal_position: Option<f64>,
}

/// Parallel columns, one entry per integration step. All columns have the
/// same length; `horizontal_position` exists only for launches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub time: Vec<f64>,
    pub potential_energy: Vec<f64>,
    pub kinetic_energy: Vec<f64>,
    pub dissipated_energy: Vec<f64>,
    pub speed: Vec<f64>,
    pub altitude: Vec<f64>,
    pub horizontal_position: Option<Vec<f64>>,
}

impl TimeSeries {
    pub fn new(with_horizontal: bool) -> Self {
        TimeSeries {
            horizontal_position: with_horizontal.then(Vec::new),
            ..TimeSeries::default()
        }
    }

    pub(crate) fn push(&mut self, sample: &Sample) {
        self.time.push(sample.time);
        self.potential_energy.push(sample.potential_energy);
        self.kinetic_energy.push(sample.kinetic_energy);
        self.dissipated_energy.push(sample.dissipated_energy);
        self.speed.push(sample.speed);
        self.altitude.push(sample.altitude);
        if let Some(column) = self.horizontal_position.as_mut() {
            column.push(sample.horizontal_position.unwrap_or(0.0));
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<Sample> {
        if index >= self.len() {
            return None;
        }
        Some(Sample {
            time: self.time[index],
            potential_energy: self.potential_energy[index],
            kinetic_energy: self.kinetic_energy[index],
            dissipated_energy: self.dissipated_energy[index],
            speed: self.speed[index],
            altitude: self.altitude[index],
            horizontal_position: self
                .horizontal_position
                .as_ref()
                .map(|column| column[index]),
        })
    }

    pub fn total_mechanical_energy(&self, index: usize) -> Option<f64> {
        self.sample(index)
            .map(|sample| sample.kinetic_energy + sample.potential_energy)
    }

    /// KE + GPE + heat, the quantity drag is supposed to leave unchanged.
    pub fn energy_balance(&self, index: usize) -> Option<f64> {
        self.sample(index).map(|sample| {
            sample.kinetic_energy + sample.potential_energy + sample.dissipated_energy
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub scenario: Scenario,
    pub terminal: TerminalCondition,
    pub terminal_time: f64,
    pub terminal_speed: f64,
    pub max_kinetic_energy: f64,
    pub max_speed: f64,
    pub max_altitude: f64,
    pub total_dissipated: f64,
    /// Launch only.
    pub horizontal_range: Option<f64>,
    /// GPE at the drop altitude for freefall, spring energy for launch.
    pub initial_energy: f64,
    pub steps: usize,
    pub series: TimeSeries,
}

impl RunSummary {
    pub fn report(&self) -> String {
        let mut lines = vec![
            format!("Scenario: {}", self.scenario),
            format!("Ended: {} after {}", self.terminal, format_time(self.terminal_time)),
            format!("Steps: {}", self.steps),
            format!("Terminal Speed: {:.2} m/s", self.terminal_speed),
            format!("Max Speed: {:.2} m/s", self.max_speed),
            format!("Max Altitude: {}", format_distance(self.max_altitude)),
        ];
        if let Some(range) = self.horizontal_range {
            lines.push(format!("Range: {}", format_distance(range)));
        }
        lines.push(format!("Initial Energy: {}", format_energy(self.initial_energy)));
        lines.push(format!("Max Kinetic Energy: {}", format_energy(self.max_kinetic_energy)));
        lines.push(format!("Dissipated by Drag: {}", format_energy(self.total_dissipated)));
        lines.join("\n")
    }
}

/// Collects samples and running maxima while an integrator steps.
#[derive(Debug, Clone)]
pub struct Telemetry {
    series: TimeSeries,
    max_kinetic_energy: f64,
    max_speed: f64,
    max_altitude: f64,
    max_horizontal: f64,
}

impl Telemetry {
    pub fn new(with_horizontal: bool, initial_altitude: f64) -> Self {
        Telemetry {
            series: TimeSeries::new(with_horizontal),
            max_kinetic_energy: 0.0,
            max_speed: 0.0,
            max_altitude: initial_altitude.max(0.0),
            max_horizontal: 0.0,
        }
    }

    pub fn collect(&mut self, sample: Sample) {
        self.max_kinetic_energy = self.max_kinetic_energy.max(sample.kinetic_energy);
        self.max_speed = self.max_speed.max(sample.speed);
        self.max_altitude = self.max_altitude.max(sample.altitude);
        if let Some(x) = sample.horizontal_position {
            self.max_horizontal = self.max_horizontal.max(x);
        }
        self.series.push(&sample);
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn last_dissipated(&self) -> f64 {
        self.series.dissipated_energy.last().copied().unwrap_or(0.0)
    }

    pub fn into_summary(
        self,
        scenario: Scenario,
        terminal: TerminalCondition,
        terminal_time: f64,
        terminal_speed: f64,
        initial_energy: f64,
    ) -> RunSummary {
        let horizontal_range = self
            .series
            .horizontal_position
            .as_ref()
            .map(|_| self.max_horizontal);
        RunSummary {
            scenario,
            terminal,
            terminal_time,
            terminal_speed,
            max_kinetic_energy: self.max_kinetic_energy,
            max_speed: self.max_speed,
            max_altitude: self.max_altitude,
            total_dissipated: self.last_dissipated(),
            horizontal_range,
            initial_energy,
            steps: self.series.len(),
            series: self.series,
        }
    }
}

fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 3600.0 {
        let hours = (elapsed_time / 3600.0).floor();
        let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
    } else if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", elapsed_time)
    }
}

fn format_distance(distance: f64) -> String {
    if distance >= 1000.0 {
        format!("{:.2} km", distance / 1000.0)
    } else {
        format!("{:.2} m", distance)
    }
}

fn format_energy(joules: f64) -> String {
    if joules >= 1e6 {
        format!("{:.2} MJ", joules / 1e6)
    } else if joules >= 1e3 {
        format!("{:.2} kJ", joules / 1e3)
    } else {
        format!("{:.2} J", joules)
    }
}

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT, TIME_STEP};
use crate::control::environment::GravityModel;
use crate::errors::SimulationError;
use crate::trajectory_system::integrator::SimulationLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Vertical drop from `initial_altitude`.
    #[default]
    Freefall,
    /// Spring-catapult launch from the ground.
    Launch,
}

impl FromStr for Scenario {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freefall" => Ok(Scenario::Freefall),
            "launch" => Ok(Scenario::Launch),
            other => Err(SimulationError::InvalidParameter(format!(
                "unknown scenario '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Freefall => write!(f, "freefall"),
            Scenario::Launch => write!(f, "launch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub spring_constant: f64,
    pub compression: f64,
    /// Degrees above the horizon.
    pub angle: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        LaunchParameters {
            spring_constant: 2_000.0,
            compression: 0.5,
            angle: 45.0,
        }
    }
}

impl LaunchParameters {
    /// Energy stored in the compressed spring, ½·k·x².
    pub fn elastic_energy(&self) -> f64 {
        0.5 * self.spring_constant * self.compression.powi(2)
    }
}

/// Inputs for a single run. The integrators trust these values as given;
/// call [`Configuration::validate`] first when they come from a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub mass: f64,
    pub initial_altitude: f64,
    pub time_step: f64,
    pub drag_enabled: bool,
    pub gravity_model: GravityModel,
    pub drag_coefficient: f64,
    pub reference_area: f64,
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub scenario: Scenario,
    pub launch: LaunchParameters,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            mass: 118.0,
            initial_altitude: 39_045.0,
            time_step: TIME_STEP,
            drag_enabled: true,
            gravity_model: GravityModel::Realistic,
            drag_coefficient: 1.0,
            reference_area: 0.8,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
            scenario: Scenario::Freefall,
            launch: LaunchParameters::default(),
        }
    }
}

impl Configuration {
    pub fn from_toml_str(source: &str) -> Result<Self, SimulationError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Same configuration with drag switched off, for overlay comparisons.
    pub fn without_drag(&self) -> Self {
        Configuration {
            drag_enabled: false,
            ..self.clone()
        }
    }

    /// Checks the inputs against the default [`SimulationLimits`].
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.validate_with_limits(&SimulationLimits::default())
    }

    /// Rejects non-physical values and a time step too small to reach the
    /// time ceiling within the step budget.
    pub fn validate_with_limits(&self, limits: &SimulationLimits) -> Result<(), SimulationError> {
        require(self.mass > 0.0, "mass", self.mass, "must be positive")?;
        require(self.time_step > 0.0, "time_step", self.time_step, "must be positive")?;
        require(
            self.time_step >= limits.min_time_step(),
            "time_step",
            self.time_step,
            "is below the step budget floor",
        )?;
        require(
            self.sea_level_density > 0.0,
            "sea_level_density",
            self.sea_level_density,
            "must be positive",
        )?;
        require(
            self.scale_height > 0.0,
            "scale_height",
            self.scale_height,
            "must be positive",
        )?;
        require(
            self.drag_coefficient >= 0.0,
            "drag_coefficient",
            self.drag_coefficient,
            "must not be negative",
        )?;
        require(
            self.reference_area >= 0.0,
            "reference_area",
            self.reference_area,
            "must not be negative",
        )?;

        match self.scenario {
            Scenario::Freefall => require(
                self.initial_altitude >= 0.0,
                "initial_altitude",
                self.initial_altitude,
                "must not be negative",
            ),
            Scenario::Launch => {
                require(
                    self.launch.spring_constant >= 0.0,
                    "launch.spring_constant",
                    self.launch.spring_constant,
                    "must not be negative",
                )?;
                require(
                    self.launch.compression >= 0.0,
                    "launch.compression",
                    self.launch.compression,
                    "must not be negative",
                )?;
                require(
                    (0.0..=90.0).contains(&self.launch.angle),
                    "launch.angle",
                    self.launch.angle,
                    "must be between 0 and 90 degrees",
                )
            }
        }
    }
}

fn require(condition: bool, name: &str, value: f64, reason: &str) -> Result<(), SimulationError> {
    // NaN fails every comparison above, so it is rejected here too
    if condition {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter(format!(
            "{} = {} {}",
            name, value, reason
        )))
    }
}

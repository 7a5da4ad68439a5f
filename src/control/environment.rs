use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{EARTH_RADIUS, SIMPLIFIED_GRAVITY, STANDARD_GRAVITY};
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityModel {
    /// Constant 10 m/s² at every altitude.
    Simplified,
    /// Inverse-square falloff from standard gravity at the surface.
    #[default]
    Realistic,
}

impl FromStr for GravityModel {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simplified" => Ok(GravityModel::Simplified),
            "realistic" => Ok(GravityModel::Realistic),
            other => Err(SimulationError::InvalidParameter(format!(
                "unknown gravity model '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravityModel::Simplified => write!(f, "simplified"),
            GravityModel::Realistic => write!(f, "realistic"),
        }
    }
}

/// Exponential atmosphere. Altitudes below sea level are treated as sea level,
/// so the result never exceeds `sea_level_density`.
pub fn air_density(altitude: f64, sea_level_density: f64, scale_height: f64) -> f64 {
    sea_level_density * (-altitude.max(0.0) / scale_height).exp()
}

pub fn gravity(altitude: f64, model: GravityModel) -> f64 {
    match model {
        GravityModel::Simplified => SIMPLIFIED_GRAVITY,
        GravityModel::Realistic => {
            let ratio = EARTH_RADIUS / (EARTH_RADIUS + altitude.max(0.0));
            STANDARD_GRAVITY * ratio.powi(2)
        }
    }
}

/// Conditions around the body at its current altitude.
#[derive(Debug, Clone)]
pub struct Environment {
    pub air_density: f64,
    pub gravity: f64,
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub gravity_model: GravityModel,
}

impl Environment {
    pub fn new(sea_level_density: f64, scale_height: f64, gravity_model: GravityModel) -> Self {
        Environment {
            air_density: sea_level_density,
            gravity: gravity(0.0, gravity_model),
            sea_level_density,
            scale_height,
            gravity_model,
        }
    }

    pub fn update(&mut self, altitude: f64) {
        self.air_density = air_density(altitude, self.sea_level_density, self.scale_height);
        self.gravity = gravity(altitude, self.gravity_model);
    }
}

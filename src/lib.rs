pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::configuration::{Configuration, LaunchParameters, Scenario};
pub use control::environment::{air_density, gravity, Environment, GravityModel};
pub use control::simulation::{
    initial_potential_energy, simulate, simulate_comparison, simulate_comparison_with_limits,
    simulate_with_limits, ComparisonRun,
};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::{drag_force, Aerodynamics};
pub use trajectory_system::energy::{drag_power, kinetic_energy, potential_energy};
pub use trajectory_system::integrator::{integrate, Integrator, SimulationLimits};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{RunSummary, Sample, TerminalCondition, TimeSeries};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;

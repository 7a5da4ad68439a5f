// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const SIMPLIFIED_GRAVITY: f64 = 10.0; // m/s², rounded for mental arithmetic
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters

// Atmosphere Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_500.0; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.05; // s
pub const MAX_SIMULATION_TIME: f64 = 2_000.0; // s
pub const HARD_STOP_TIME: f64 = 3_600.0; // s
pub const MAX_INTEGRATION_STEPS: usize = 1_000_000; // sets the time step floor, ~2 ms

// Numerical floors
pub const MIN_SPEED: f64 = 1e-9; // m/s, drag direction divisor

// Initial potential energy quadrature
pub const GRAVITY_AVERAGE_SUBINTERVALS: usize = 200;

pub mod aerodynamics;
pub mod energy;
pub mod freefall;
pub mod integrator;
pub mod launch;

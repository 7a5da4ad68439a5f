pub mod configuration;
pub mod environment;
pub mod simulation;

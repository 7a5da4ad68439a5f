use std::env;

use freefall_simulation::*;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }

    let mut config_path = None;
    let mut compare = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--compare" => compare = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match &config_path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Configuration::load(path)?
        }
        None => Configuration::default(),
    };

    if let Err(e) = config.validate() {
        error!("Refusing to run: {}", e);
        return Err(e.into());
    }

    if config.scenario == Scenario::Freefall {
        let top_energy =
            initial_potential_energy(config.mass, config.initial_altitude, config.gravity_model);
        println!("Initial potential energy: {:.2} J", top_energy);
    }

    if compare {
        let comparison = simulate_comparison(&config);
        println!("--- Simulation Summary ---");
        println!("{}", comparison.primary.report());
        println!("\n--- Without Drag ---");
        println!("{}", comparison.without_drag.report());
    } else {
        println!("--- Simulation Summary ---");
        println!("{}", simulate(&config).report());
    }

    Ok(())
}

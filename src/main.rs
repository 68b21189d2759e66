extern crate anyhow;
extern crate byteforge_math;
extern crate env_logger;
#[macro_use]
extern crate log;

use std::process;

use byteforge_math::config;

const DEFAULT_CONFIG: &str = "config.ini";

fn run() -> anyhow::Result<()> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let settings = config::load_config(&filename)?;

    println!("Projection:\n{}\n", settings.projection.matrix());
    println!("Placement:\n{}", settings.placement.matrix());

    match settings.probe {
        Some(probe) => {
            println!(
                "\nProbe {}: length {}, normalized {}",
                probe,
                probe.mag(),
                probe.norm(),
            );
        }

        None => debug!("No probe vector configured"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

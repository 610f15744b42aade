use clap::Parser;
use std::error::Error;
use std::io::Write;

use monopoly_sim::logging::setup_logging;
use monopoly_sim::{Simulation, SimulationConfig, StartConditions};

#[derive(Parser, Debug)]
#[command(
    name = "monopoly_sim",
    about = "Estimate how often each Monopoly spot is landed on"
)]
struct Config {
    /// Number of games to simulate
    #[arg(short = 's', long, default_value_t = 1000)]
    simulations: usize,

    /// Number of turns (dice rolls) per game
    #[arg(short = 't', long, default_value_t = 100)]
    turns: usize,

    /// Starting spot (0 = GO, 10 = jail, 20 = free parking, 30 = go to jail)
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Start with a get-out-of-jail-free card
    #[arg(long, default_value_t = false)]
    release_token: bool,

    /// Start in jail (overrides --start)
    #[arg(long, default_value_t = false)]
    jailed: bool,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long)]
    seed: Option<u64>,

    /// List the least visited spots first
    #[arg(long, default_value_t = false)]
    ascending: bool,

    /// Print the ranking as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<&Config> for SimulationConfig {
    fn from(cli: &Config) -> Self {
        SimulationConfig {
            simulations: cli.simulations,
            turns: cli.turns,
            start: StartConditions {
                position: cli.start,
                release_token: cli.release_token,
                jailed: cli.jailed,
            },
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    let _logger = setup_logging("info")?;

    log::info!(
        "🎲 Simulating {} games of {} turns",
        config.simulations,
        config.turns
    );

    let mut simulation = Simulation::with_config(SimulationConfig::from(&config))?;
    simulation.run();

    let ranking = simulation.ranking(!config.ascending)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &ranking)?;
        writeln!(out)?;
    } else {
        ranking.write_lines(&mut out)?;
    }

    if let Some(top) = ranking.entries().first() {
        log::info!(
            "✅ {} distinct spots visited, spot {} holds {:.2}% of visits",
            ranking.len(),
            top.spot,
            ranking.share(top.spot) * 100.0
        );
    }
    Ok(())
}

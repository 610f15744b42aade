use crate::game::board::Spot;
use crate::game::game_state::GameState;
use crate::game::play_game::Game;
use crate::simulation::config::SimulationConfig;
use crate::simulation::visualize::{flatten, VisitRanking, Visualization};
use crate::{MonopolyError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Plays many independent games from the same start and aggregates the spots they visit.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    initial: GameState,
    simulated_games: Option<Vec<Vec<Spot>>>,
}

impl Simulation {
    /// Games start on GO, without a release token and outside jail.
    pub fn new(simulations: usize, turns: usize) -> Simulation {
        let config = SimulationConfig::new(simulations, turns);
        Simulation {
            // Default start conditions are on the board
            initial: GameState::from_validated(&config.start),
            config,
            simulated_games: None,
        }
    }

    pub fn with_config(config: SimulationConfig) -> Result<Simulation> {
        config.validate()?;
        Ok(Simulation {
            initial: GameState::from_validated(&config.start),
            config,
            simulated_games: None,
        })
    }

    /// Visit sequences of the last run, if any.
    pub fn simulated_games(&self) -> Option<&[Vec<Spot>]> {
        self.simulated_games.as_deref()
    }

    /// Plays every game from scratch, replacing the results of any previous run.
    pub fn run(&mut self) -> &[Vec<Spot>] {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        log::debug!(
            "Running {} games of {} turns (seed {})",
            self.config.simulations,
            self.config.turns,
            seed
        );

        let games: Vec<Vec<Spot>> = (0..self.config.simulations)
            .map(|_| Game::from_state(self.config.turns, self.initial).play(&mut rng))
            .collect();

        self.simulated_games.insert(games)
    }

    /// With `sort` unset, returns every visited spot of every game. Otherwise
    /// returns the visit counts of the visited spots, most visited first when
    /// `reverse` is set.
    pub fn visualize(&self, sort: bool, reverse: bool) -> Result<Visualization> {
        let games = self.simulated_games.as_deref().ok_or(MonopolyError::NotRun)?;
        if sort {
            Ok(Visualization::Ranked(VisitRanking::from_games(games, reverse)))
        } else {
            Ok(Visualization::Flat(flatten(games)))
        }
    }

    /// Visit counts of the last run.
    pub fn ranking(&self, descending: bool) -> Result<VisitRanking> {
        let games = self.simulated_games.as_deref().ok_or(MonopolyError::NotRun)?;
        Ok(VisitRanking::from_games(games, descending))
    }

    /// Runs a fresh simulation and writes its ranking, most visited first.
    pub fn write_ranking<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.run();
        self.ranking(true)?.write_lines(writer)?;
        Ok(())
    }

    /// Runs a fresh simulation and prints `spot=<position> visits=<count>` lines to stdout.
    pub fn print_dict(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_ranking(&mut handle)
    }
}

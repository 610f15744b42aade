//! Simulation configuration.

use crate::game::game_state::StartConditions;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Parameters shared by every game of a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent games to play
    /// Default: 1000
    pub simulations: usize,

    /// Turns (dice rolls) per game
    /// Default: 100
    pub turns: usize,

    /// Initial conditions applied identically to every game
    /// Default: on GO, no release token, not jailed
    #[serde(default)]
    pub start: StartConditions,

    /// RNG seed for reproducible runs, drawn at random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulations: 1000,
            turns: 100,
            start: StartConditions::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(simulations: usize, turns: usize) -> Self {
        Self {
            simulations,
            turns,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: StartConditions) -> Self {
        self.start = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.start.validate()
    }

    /// Total number of turns resolved by one run
    pub fn total_turns(&self) -> usize {
        self.simulations * self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonopolyError;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.simulations, 1000);
        assert_eq!(config.turns, 100);
        assert_eq!(config.start, StartConditions::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.total_turns(), 100_000);
    }

    #[test]
    fn test_builder_and_validation() {
        let config = SimulationConfig::new(10, 20)
            .with_seed(99)
            .with_start(StartConditions {
                position: 45,
                ..StartConditions::default()
            });
        assert_eq!(config.seed, Some(99));
        assert_matches!(config.validate(), Err(MonopolyError::InvalidSpot(45)));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"simulations": 5, "turns": 8}"#).unwrap();
        assert_eq!(config, SimulationConfig::new(5, 8));
    }
}

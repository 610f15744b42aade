pub mod config;
pub mod simulation;
pub mod visualize;

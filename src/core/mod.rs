pub mod cli;
pub mod config;
pub mod error;
pub mod rng;
pub mod time;

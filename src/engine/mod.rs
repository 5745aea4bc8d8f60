// userpath Engine - Core module structure
pub mod cli;
pub mod config;
pub mod installer;
pub mod store;

pub mod cli;
pub mod config;
pub mod export;
pub mod script;
pub mod setup;

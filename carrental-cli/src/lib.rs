//! Terminal front end for carrental

pub mod config;
pub mod error;
pub mod terminal;

pub use config::{AppConfig, Cli, FleetEntry};
pub use error::CliError;
pub use terminal::{MenuChoice, Terminal};

pub type Result<T> = std::result::Result<T, CliError>;

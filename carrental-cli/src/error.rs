//! CLI error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] carrental_core::RentalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

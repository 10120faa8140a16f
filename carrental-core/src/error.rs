//! Error types for carrental

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Car {car_id} is not available for rent")]
    NotAvailable { car_id: String },

    #[error("Car {car_id} is not rented")]
    NotRented { car_id: String },

    #[error("Car {car_id} is marked rented but has no rental record")]
    LedgerInconsistent { car_id: String },

    #[error("Invalid car id: {0}")]
    InvalidCarId(String),

    #[error("Invalid customer name: {0}")]
    InvalidCustomerName(String),

    #[error("Invalid rental days: {0}")]
    InvalidRentalDays(u32),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price for car {car_id} over {days} days is too large")]
    PriceOverflow { car_id: String, days: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RentalError {
    /// True for conditions the terminal reports and recovers from.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RentalError::Serialization(_) | RentalError::Io(_))
    }
}

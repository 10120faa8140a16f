//! Core data types for carrental

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Unique car identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarId(String);

impl CarId {
    /// Create a new car ID with validation
    pub fn new(id: &str) -> crate::Result<Self> {
        if id.is_empty() {
            return Err(crate::RentalError::InvalidCarId("empty id".to_string()));
        }

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(crate::RentalError::InvalidCarId(format!(
                "whitespace or control characters in '{}'",
                id
            )));
        }

        Ok(CarId(id.to_string()))
    }

    /// Get the car id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CarId {
    type Error = crate::RentalError;

    fn try_from(value: String) -> crate::Result<Self> {
        CarId::new(&value)
    }
}

impl From<CarId> for String {
    fn from(id: CarId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer identifier, minted sequentially by the customer directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub const PREFIX: &'static str = "CUS";

    /// Id for the `sequence`-th customer (1-based)
    pub fn from_sequence(sequence: usize) -> Self {
        CustomerId(format!("{}{}", Self::PREFIX, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A car in the fleet. Only built through [`Car::new`], so the price check always runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    id: CarId,
    brand: String,
    model: String,
    base_price_per_day: Decimal,
    available: bool,
}

impl Car {
    /// Create an available car; the daily price must not be negative
    pub fn new(
        id: CarId,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: Decimal,
    ) -> crate::Result<Self> {
        if base_price_per_day < Decimal::ZERO {
            return Err(crate::RentalError::InvalidPrice(format!(
                "negative daily price {} for car {}",
                base_price_per_day, id
            )));
        }

        Ok(Car {
            id,
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            available: true,
        })
    }

    pub fn id(&self) -> &CarId {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price_per_day(&self) -> Decimal {
        self.base_price_per_day
    }

    /// Exact price for `days`; rounding is left to display
    pub fn calculate_price(&self, days: RentalDays) -> crate::Result<Decimal> {
        self.base_price_per_day
            .checked_mul(Decimal::from(days.get()))
            .ok_or_else(|| crate::RentalError::PriceOverflow {
                car_id: self.id.to_string(),
                days: days.get(),
            })
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the car as rented
    pub fn rent(&mut self) {
        self.available = false;
    }

    /// Mark the car as available again
    pub fn mark_returned(&mut self) {
        self.available = true;
    }

    /// "Brand Model", as shown on receipts
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} {}", self.id, self.brand, self.model)
    }
}

/// Number of days a car is rented for; never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RentalDays(u32);

impl RentalDays {
    pub fn new(days: u32) -> crate::Result<Self> {
        if days == 0 {
            return Err(crate::RentalError::InvalidRentalDays(days));
        }
        Ok(RentalDays(days))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RentalDays {
    type Error = crate::RentalError;

    fn try_from(value: u32) -> crate::Result<Self> {
        RentalDays::new(value)
    }
}

impl From<RentalDays> for u32 {
    fn from(days: RentalDays) -> Self {
        days.0
    }
}

impl std::fmt::Display for RentalDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An active rental: snapshots of the car and customer taken at rental time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    car: Car,
    customer: Customer,
    days: RentalDays,
}

impl Rental {
    pub fn new(car: Car, customer: Customer, days: RentalDays) -> Self {
        Rental {
            car,
            customer,
            days,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_id(&self) -> &CarId {
        self.car.id()
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn days(&self) -> RentalDays {
        self.days
    }

    /// Total price at the snapshot's daily rate
    pub fn total_price(&self) -> crate::Result<Decimal> {
        self.car.calculate_price(self.days)
    }

    /// Consume the rental, keeping only the customer
    pub fn into_customer(self) -> Customer {
        self.customer
    }
}

/// Format a price for display: `$` and two decimals, half away from zero
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

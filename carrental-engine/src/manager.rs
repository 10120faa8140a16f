//! Rental orchestration over the fleet, customer directory and ledger

use carrental_core::*;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{CustomerDirectory, FleetRegistry, RentalLedger};

/// When a customer record is created during the rent flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPolicy {
    /// As soon as a quote is issued for an available car, even if the
    /// rental is later cancelled
    #[default]
    OnAttempt,
    /// Only when the rental is committed
    OnCommit,
}

/// A priced rental that has not been applied yet
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuote {
    car_id: CarId,
    car_name: String,
    customer: Customer,
    registered: bool,
    days: RentalDays,
    price: Decimal,
}

impl RentalQuote {
    pub fn car_id(&self) -> &CarId {
        &self.car_id
    }

    /// Brand and model of the quoted car
    pub fn car_name(&self) -> &str {
        &self.car_name
    }

    /// The customer, or under `OnCommit` a preview of the record commit will create
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn days(&self) -> RentalDays {
        self.days
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Outcome of a committed rental
#[derive(Debug, Clone, PartialEq)]
pub struct RentalConfirmation {
    pub car_id: CarId,
    pub car_name: String,
    pub customer: Customer,
    pub days: RentalDays,
    pub price: Decimal,
}

/// Outcome of a returned car
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnReceipt {
    pub car_id: CarId,
    pub customer: Customer,
    pub days: RentalDays,
}

/// Owns all rental state for one run
#[derive(Debug, Default)]
pub struct RentalManager {
    fleet: FleetRegistry,
    customers: CustomerDirectory,
    ledger: RentalLedger,
    registration: RegistrationPolicy,
}

impl RentalManager {
    pub fn new(registration: RegistrationPolicy) -> Self {
        RentalManager {
            registration,
            ..Default::default()
        }
    }

    /// Manager over the three-car demo fleet, for tests
    #[cfg(any(test, feature = "test-utils"))]
    pub fn sample() -> Self {
        Self::sample_with(RegistrationPolicy::default())
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn sample_with(registration: RegistrationPolicy) -> Self {
        let mut manager = Self::new(registration);
        for (id, brand, model, price) in [
            ("C001", "Toyota", "Camry", 60),
            ("C002", "Honda", "Accord", 70),
            ("C003", "Mahindra", "Thar", 150),
        ] {
            let car = Car::new(CarId::new(id).unwrap(), brand, model, Decimal::new(price, 0))
                .unwrap();
            manager.add_car(car);
        }
        manager
    }

    /// Grow the fleet
    pub fn add_car(&mut self, car: Car) {
        debug!(car_id = %car.id(), "Adding car to fleet");
        self.fleet.add_car(car);
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }

    pub fn registration(&self) -> RegistrationPolicy {
        self.registration
    }

    /// Validate and price a rental without touching the fleet or ledger.
    ///
    /// Under `OnAttempt` the customer is registered here, so a quote that is
    /// later cancelled still leaves a directory entry behind.
    pub fn quote(&mut self, car_id: &str, customer_name: &str, days: RentalDays) -> Result<RentalQuote> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(RentalError::InvalidCustomerName("empty name".to_string()));
        }

        let car = CarId::new(car_id.trim())
            .ok()
            .and_then(|id| self.fleet.find_available_car(&id))
            .ok_or_else(|| {
                warn!(car_id, "Rejected quote for unavailable car");
                RentalError::NotAvailable {
                    car_id: car_id.to_string(),
                }
            })?;

        let price = car.calculate_price(days).map_err(|err| {
            warn!(car_id = %car.id(), days = days.get(), "Rejected quote with overflowing price");
            err
        })?;
        let car_id = car.id().clone();
        let car_name = car.display_name();

        let (customer, registered) = match self.registration {
            RegistrationPolicy::OnAttempt => (self.customers.register(customer_name), true),
            RegistrationPolicy::OnCommit => (
                Customer::new(self.customers.next_id(), customer_name),
                false,
            ),
        };

        debug!(%car_id, customer_id = %customer.id(), days = days.get(), %price, "Quoted rental");

        Ok(RentalQuote {
            car_id,
            car_name,
            customer,
            registered,
            days,
            price,
        })
    }

    /// Apply a quote: flip the car to rented and record the rental
    pub fn commit(&mut self, quote: RentalQuote) -> Result<RentalConfirmation> {
        let RentalQuote {
            car_id,
            car_name,
            customer,
            registered,
            days,
            price,
        } = quote;

        let car = self.fleet.find_available_car_mut(&car_id).ok_or_else(|| {
            warn!(%car_id, "Car became unavailable before commit");
            RentalError::NotAvailable {
                car_id: car_id.to_string(),
            }
        })?;

        let customer = if registered {
            customer
        } else {
            self.customers.register(customer.name())
        };

        car.rent();
        self.ledger.record(car.clone(), customer.clone(), days);

        info!(%car_id, customer_id = %customer.id(), days = days.get(), %price, "Car rented");

        Ok(RentalConfirmation {
            car_id,
            car_name,
            customer,
            days,
            price,
        })
    }

    /// Drop a quote without applying it
    pub fn cancel(&self, quote: RentalQuote) {
        debug!(car_id = %quote.car_id, registered = quote.registered, "Rental cancelled");
    }

    /// Quote and commit in one step
    pub fn rent(&mut self, car_id: &str, customer_name: &str, days: RentalDays) -> Result<RentalConfirmation> {
        let quote = self.quote(car_id, customer_name, days)?;
        self.commit(quote)
    }

    /// Flip a rented car back to available and release its ledger entries
    pub fn return_car(&mut self, car_id: &str) -> Result<ReturnReceipt> {
        let not_rented = || {
            warn!(car_id, "Rejected return for car that is not rented");
            RentalError::NotRented {
                car_id: car_id.to_string(),
            }
        };

        let id = CarId::new(car_id.trim()).map_err(|_| not_rented())?;
        let car = self.fleet.find_rented_car_mut(&id).ok_or_else(not_rented)?;
        car.mark_returned();

        let released = self.ledger.take_by_car_id(&id);
        if released.len() > 1 {
            warn!(car_id = %id, count = released.len(), "Released duplicate rentals for one car");
        }

        let rental = released.into_iter().next().ok_or_else(|| {
            warn!(car_id = %id, "Rented car had no ledger entry");
            RentalError::LedgerInconsistent {
                car_id: id.to_string(),
            }
        })?;

        let days = rental.days();
        let customer = rental.into_customer();
        info!(car_id = %id, customer_id = %customer.id(), "Car returned");

        Ok(ReturnReceipt {
            car_id: id,
            customer,
            days,
        })
    }

    #[cfg(test)]
    pub(crate) fn ledger_mut(&mut self) -> &mut RentalLedger {
        &mut self.ledger
    }
}

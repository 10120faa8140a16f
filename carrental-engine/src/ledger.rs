//! Ledger of active rentals

use carrental_core::*;

/// Rental snapshots in the order they were recorded
#[derive(Debug, Default)]
pub struct RentalLedger {
    rentals: Vec<Rental>,
}

impl RentalLedger {
    pub fn new() -> Self {
        RentalLedger {
            rentals: Vec::new(),
        }
    }

    /// Append a rental built from snapshots of `car` and `customer`
    pub fn record(&mut self, car: Car, customer: Customer, days: RentalDays) {
        self.rentals.push(Rental::new(car, customer, days));
    }

    /// Remove every rental for `car_id`; false if there was none.
    /// The return path uses [`take_by_car_id`](Self::take_by_car_id) to keep the customer.
    pub fn release_by_car_id(&mut self, car_id: &CarId) -> bool {
        !self.take_by_car_id(car_id).is_empty()
    }

    /// Remove every rental for `car_id` and hand them back in ledger order
    pub fn take_by_car_id(&mut self, car_id: &CarId) -> Vec<Rental> {
        let (taken, kept): (Vec<Rental>, Vec<Rental>) = std::mem::take(&mut self.rentals)
            .into_iter()
            .partition(|rental| rental.car_id() == car_id);
        self.rentals = kept;
        taken
    }

    pub fn find_by_car_id(&self, car_id: &CarId) -> Option<&Rental> {
        self.rentals.iter().find(|rental| rental.car_id() == car_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rental> + '_ {
        self.rentals.iter()
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }
}

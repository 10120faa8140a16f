//! Append-only customer directory

use carrental_core::*;

#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        CustomerDirectory {
            customers: Vec::new(),
        }
    }

    /// Mint the next sequential id, store the customer and hand back a copy
    pub fn register(&mut self, name: &str) -> Customer {
        let customer = Customer::new(self.next_id(), name);
        self.customers.push(customer.clone());
        customer
    }

    /// Id the next registration will receive
    pub fn next_id(&self) -> CustomerId {
        CustomerId::from_sequence(self.customers.len() + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

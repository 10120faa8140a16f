//! In-memory rental engine: fleet, customers, ledger and the manager tying them together

pub mod customers;
pub mod fleet;
pub mod ledger;
pub mod manager;

pub use customers::*;
pub use fleet::*;
pub use ledger::*;
pub use manager::*;

#[cfg(test)]
mod tests {
    use super::*;
    use carrental_core::*;

    #[test]
    fn test_sample_fleet() {
        let manager = RentalManager::sample();
        assert_eq!(manager.fleet().len(), 3);
        assert_eq!(manager.fleet().list_available().count(), 3);
        assert_eq!(manager.registration(), RegistrationPolicy::OnAttempt);
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = RentalManager::new(RegistrationPolicy::OnCommit);
        assert!(manager.fleet().is_empty());
        assert!(manager.customers().is_empty());
        assert!(manager.ledger().is_empty());
        assert!(manager
            .fleet()
            .find_available_car(&CarId::new("C001").unwrap())
            .is_none());
    }
}

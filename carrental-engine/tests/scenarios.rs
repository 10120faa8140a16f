//! Integration tests for the rent/return walkthrough

use carrental_core::*;
use carrental_engine::*;
use rust_decimal::Decimal;

fn single_camry() -> RentalManager {
    let mut manager = RentalManager::new(RegistrationPolicy::OnAttempt);
    let car = Car::new(CarId::new("C001").unwrap(), "Toyota", "Camry", Decimal::new(60, 0)).unwrap();
    manager.add_car(car);
    manager
}

fn c001() -> CarId {
    CarId::new("C001").unwrap()
}

#[test]
fn rent_return_walkthrough() {
    let mut manager = single_camry();

    // Rent C001 for 3 days
    let confirmation = manager
        .rent("C001", "Ada", RentalDays::new(3).unwrap())
        .unwrap();
    assert_eq!(confirmation.price, Decimal::new(180, 0));
    assert_eq!(format_price(confirmation.price), "$180.00");
    assert!(manager.fleet().find_available_car(&c001()).is_none());
    assert_eq!(manager.fleet().list_available().count(), 0);

    // Renting again before return is refused
    let err = manager
        .rent("C001", "Bob", RentalDays::new(1).unwrap())
        .unwrap_err();
    assert!(matches!(err, RentalError::NotAvailable { .. }));
    assert_eq!(manager.ledger().len(), 1);

    // Return makes it available again and clears the ledger
    let receipt = manager.return_car("C001").unwrap();
    assert_eq!(receipt.customer.name(), "Ada");
    assert!(manager.fleet().find_available_car(&c001()).is_some());
    assert!(manager.ledger().find_by_car_id(&c001()).is_none());
}

#[test]
fn return_of_unknown_car_changes_nothing() {
    let mut manager = single_camry();
    manager.rent("C001", "Ada", RentalDays::new(2).unwrap()).unwrap();

    let err = manager.return_car("C999").unwrap_err();
    assert!(matches!(err, RentalError::NotRented { .. }));
    assert_eq!(manager.ledger().len(), 1);
    assert!(manager.fleet().find_rented_car(&c001()).is_some());
}

#[test]
fn return_of_available_car_is_not_rented() {
    let mut manager = single_camry();

    let err = manager.return_car("C001").unwrap_err();
    assert!(matches!(err, RentalError::NotRented { .. }));
    assert!(manager.fleet().find_available_car(&c001()).is_some());
}

#[test]
fn cancelled_rental_keeps_car_available() {
    let mut manager = single_camry();

    let quote = manager
        .quote("C001", "Ada", RentalDays::new(3).unwrap())
        .unwrap();
    assert_eq!(quote.price(), Decimal::new(180, 0));
    assert_eq!(quote.car_name(), "Toyota Camry");
    manager.cancel(quote);

    assert!(manager.ledger().is_empty());
    assert!(manager.fleet().find_available_car(&c001()).is_some());
    // the directory still grew
    assert_eq!(manager.customers().len(), 1);

    let next = manager.rent("C001", "Ada", RentalDays::new(1).unwrap()).unwrap();
    assert_eq!(next.customer.id().as_str(), "CUS2");
}

#[test]
fn snapshot_survives_fleet_growth() {
    let mut manager = single_camry();
    manager.rent("C001", "Ada", RentalDays::new(2).unwrap()).unwrap();

    let car = Car::new(CarId::new("C002").unwrap(), "Honda", "Accord", Decimal::new(70, 0)).unwrap();
    manager.add_car(car);

    let rental = manager.ledger().find_by_car_id(&c001()).unwrap();
    assert_eq!(rental.car().brand(), "Toyota");
    assert_eq!(rental.total_price().unwrap(), Decimal::new(120, 0));

    let available: Vec<String> = manager.fleet().list_available().map(|c| c.to_string()).collect();
    assert_eq!(available, vec!["C002 - Honda Accord".to_string()]);
}

#[test]
fn customers_keep_counting_across_returns() {
    let mut manager = RentalManager::sample();

    for expected in 1..=4 {
        let confirmation = manager
            .rent("C003", "Repeat", RentalDays::new(1).unwrap())
            .unwrap();
        assert_eq!(confirmation.customer.id().to_string(), format!("CUS{}", expected));
        manager.return_car("C003").unwrap();
    }

    assert_eq!(manager.customers().len(), 4);
    assert!(manager.ledger().is_empty());
}

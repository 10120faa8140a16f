//! Fleet registry: the cars known to the system and their availability

use carrental_core::*;

/// Insertion-ordered store of live car records
#[derive(Debug, Default)]
pub struct FleetRegistry {
    cars: Vec<Car>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        FleetRegistry { cars: Vec::new() }
    }

    /// Append a car, marking it available. Duplicate ids are not checked.
    pub fn add_car(&mut self, mut car: Car) {
        car.mark_returned();
        self.cars.push(car);
    }

    /// Car with this id that is currently available
    pub fn find_available_car(&self, car_id: &CarId) -> Option<&Car> {
        self.cars
            .iter()
            .find(|car| car.id() == car_id && car.is_available())
    }

    /// Car with this id that is currently rented
    pub fn find_rented_car(&self, car_id: &CarId) -> Option<&Car> {
        self.cars
            .iter()
            .find(|car| car.id() == car_id && !car.is_available())
    }

    /// Available cars in registry order. Call again to restart.
    pub fn list_available(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter().filter(|car| car.is_available())
    }

    /// First car with this id, whatever its state
    pub fn get(&self, car_id: &CarId) -> Option<&Car> {
        self.cars.iter().find(|car| car.id() == car_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub(crate) fn find_available_car_mut(&mut self, car_id: &CarId) -> Option<&mut Car> {
        self.cars
            .iter_mut()
            .find(|car| car.id() == car_id && car.is_available())
    }

    pub(crate) fn find_rented_car_mut(&mut self, car_id: &CarId) -> Option<&mut Car> {
        self.cars
            .iter_mut()
            .find(|car| car.id() == car_id && !car.is_available())
    }
}

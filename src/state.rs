// Car table state. Every edit builds a new list; the UI swaps it into its signal.

use crate::models::{Car, CarField, FuelType};

#[derive(Debug, Clone, PartialEq)]
pub struct CarList {
    cars: Vec<Car>,
    next_id: u32,
}

impl Default for CarList {
    fn default() -> Self {
        Self::new()
    }
}

impl CarList {
    /// A list holding one default car.
    pub fn new() -> Self {
        CarList {
            cars: vec![Car::default()],
            next_id: 1,
        }
    }

    #[cfg(test)]
    /// Starts from the given cars, assigning fresh row ids. An empty input
    /// still yields one default row.
    pub fn from_cars(cars: Vec<Car>) -> Self {
        let mut list = CarList {
            cars: Vec::with_capacity(cars.len().max(1)),
            next_id: 0,
        };
        for car in cars {
            list.push(car);
        }
        if list.cars.is_empty() {
            list.push(Car::default());
        }
        list
    }

    fn push(&mut self, mut car: Car) {
        car.id = self.next_id;
        self.next_id += 1;
        self.cars.push(car);
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn can_remove(&self) -> bool {
        self.cars.len() > 1
    }

    pub fn with_car_added(&self) -> Self {
        let mut next = self.clone();
        next.push(Car::default());
        next
    }

    /// Replaces one field of the row at `index`. Out-of-range indices leave the
    /// list as it was.
    pub fn with_field_updated(&self, index: usize, field: CarField, value: &str) -> Self {
        let mut next = self.clone();
        if let Some(car) = next.cars.get_mut(index) {
            match field {
                CarField::Name => car.name = value.to_string(),
                CarField::BuyPrice => car.buy_price = value.to_string(),
                CarField::LitersPer100km => car.liters_per_100km = value.to_string(),
                CarField::FuelType => car.fuel_type = FuelType::from_form(value),
            }
        }
        next
    }

    /// `None` when the row does not exist or is the last one left.
    pub fn with_car_removed(&self, index: usize) -> Option<Self> {
        if !self.can_remove() || index >= self.cars.len() {
            return None;
        }
        let mut next = self.clone();
        next.cars.remove(index);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_ids_stay_unique_after_removal() {
        let list = CarList::new().with_car_added().with_car_added();
        let list = list.with_car_removed(1).unwrap().with_car_added();
        let ids: Vec<u32> = list.cars().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_from_empty_keeps_one_row() {
        let list = CarList::from_cars(Vec::new());
        assert_eq!(list.len(), 1);
        assert!(!list.can_remove());
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let list = CarList::new();
        assert_eq!(list.with_field_updated(5, CarField::Name, "x"), list);
    }
}

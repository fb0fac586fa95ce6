//! Cost model: sampled total-cost curves and pairwise break-even distances.
//!
//! Total cost of a car at distance `d` km is
//! `buy_price + d / 100 * liters_per_100km * fuel_price`, a straight line in `d`.

use crate::models::{
    BreakEven, Car, Comparison, CostCurve, CostPoint, CostSample, FuelPrices, SamplingRange,
};
use crate::utils::{display_label, legend_label, line_color, parse_decimal};

pub fn buy_price(car: &Car) -> f64 {
    parse_decimal(&car.buy_price)
}

pub fn liters_per_100km(car: &Car) -> f64 {
    parse_decimal(&car.liters_per_100km)
}

/// Fuel cost per 100 km.
pub fn rate(car: &Car, prices: &FuelPrices) -> f64 {
    liters_per_100km(car) * prices.price_for(car.fuel_type)
}

pub fn total_cost(car: &Car, prices: &FuelPrices, distance_km: f64) -> f64 {
    buy_price(car) + (distance_km / 100.0) * rate(car, prices)
}

pub fn cost_curve(index: usize, car: &Car, prices: &FuelPrices, range: &SamplingRange) -> CostCurve {
    let points = range
        .distances()
        .map(|distance_km| CostPoint {
            distance_km,
            cost: total_cost(car, prices, distance_km as f64),
        })
        .collect();

    CostCurve {
        label: legend_label(car),
        color: line_color(index),
        points,
    }
}

pub fn cost_curves(cars: &[Car], prices: &FuelPrices, range: &SamplingRange) -> Vec<CostCurve> {
    cars.iter()
        .enumerate()
        .map(|(i, car)| cost_curve(i, car, prices, range))
        .collect()
}

/// Row view of the curves: one sample per grid distance, costs indexed by car.
pub fn cost_samples(cars: &[Car], prices: &FuelPrices, range: &SamplingRange) -> Vec<CostSample> {
    range
        .distances()
        .map(|distance_km| CostSample {
            distance_km,
            costs: cars
                .iter()
                .map(|car| total_cost(car, prices, distance_km as f64))
                .collect(),
        })
        .collect()
}

/// Distance where the two cost lines meet, or `None` for parallel lines.
/// The result is not clamped to any window and may be negative.
pub fn crossing_distance(a: &Car, b: &Car, prices: &FuelPrices) -> Option<f64> {
    let denom = rate(a, prices) - rate(b, prices);
    if denom == 0.0 {
        return None;
    }
    Some(((buy_price(b) - buy_price(a)) / denom) * 100.0)
}

/// Break-even points of every pair `i < j`, in enumeration order. Only
/// crossings strictly inside `(0, max_distance_km)` are kept, and a crossing
/// that rounds to 0 km is dropped.
pub fn break_evens(cars: &[Car], prices: &FuelPrices, max_distance_km: u32) -> Vec<BreakEven> {
    let max_km = max_distance_km as f64;
    let mut results = Vec::new();

    for (i, car_a) in cars.iter().enumerate() {
        for (j, car_b) in cars.iter().enumerate().skip(i + 1) {
            let Some(km) = crossing_distance(car_a, car_b, prices) else {
                continue;
            };
            if km <= 0.0 || km >= max_km {
                continue;
            }
            let distance_km = km.round() as u64;
            if distance_km == 0 {
                continue;
            }
            results.push(BreakEven {
                car_a: display_label(car_a, i),
                car_b: display_label(car_b, j),
                distance_km,
            });
        }
    }

    results
}

pub fn compare(cars: &[Car], prices: &FuelPrices, range: &SamplingRange) -> Comparison {
    Comparison {
        curves: cost_curves(cars, prices, range),
        break_evens: break_evens(cars, prices, range.max_distance_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FuelType;

    #[test]
    fn test_rate_uses_fuel_type_price() {
        let prices = FuelPrices {
            petrol: 2.0,
            diesel: 3.0,
        };
        let petrol = Car::new("", "0", "5", FuelType::Petrol);
        let diesel = Car::new("", "0", "5", FuelType::Diesel);
        assert_eq!(rate(&petrol, &prices), 10.0);
        assert_eq!(rate(&diesel, &prices), 15.0);
    }

    #[test]
    fn test_crossing_distance_parallel_lines() {
        let prices = FuelPrices::default();
        let a = Car::new("", "100", "5", FuelType::Petrol);
        let b = Car::new("", "100", "5", FuelType::Petrol);
        assert_eq!(crossing_distance(&a, &b, &prices), None);
    }

    #[test]
    fn test_crossing_distance_can_be_negative() {
        let prices = FuelPrices {
            petrol: 1.0,
            diesel: 1.0,
        };
        // Cheaper and more economical: lines met "before" 0 km.
        let a = Car::new("", "10000", "4", FuelType::Petrol);
        let b = Car::new("", "20000", "6", FuelType::Petrol);
        let km = crossing_distance(&a, &b, &prices).unwrap();
        assert!(km < 0.0);
        assert!(break_evens(&[a, b], &prices, 100_000).is_empty());
    }
}

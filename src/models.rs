use crate::state::CarList;
use dioxus::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PETROL_PRICE: f64 = 1.433;
pub const DEFAULT_DIESEL_PRICE: f64 = 1.465;
pub const DEFAULT_MAX_DISTANCE_KM: u32 = 100_000;
pub const DEFAULT_STEP_KM: u32 = 100;
/// Upper bound on points per curve accepted from configuration or requests.
pub const MAX_SAMPLES: u64 = 100_001;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
}

impl FuelType {
    /// Value used by the `<select>` in the car table and by the JSON API.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
        }
    }

    // Anything that is not "diesel" falls back to petrol, like an unknown <option>.
    pub fn from_form(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("diesel") {
            FuelType::Diesel
        } else {
            FuelType::Petrol
        }
    }
}

/// One row of the car table. Numeric fields keep the raw form text and are
/// coerced when the cost model runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Car {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub buy_price: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub liters_per_100km: String,
    #[serde(default)]
    pub fuel_type: FuelType,
}

impl Car {
    #[cfg(test)]
    pub fn new(name: &str, buy_price: &str, liters_per_100km: &str, fuel_type: FuelType) -> Self {
        Car {
            id: 0,
            name: name.to_string(),
            buy_price: buy_price.to_string(),
            liters_per_100km: liters_per_100km.to_string(),
            fuel_type,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Which field of a car row an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarField {
    Name,
    BuyPrice,
    LitersPer100km,
    FuelType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FuelPrices {
    pub petrol: f64,
    pub diesel: f64,
}

impl Default for FuelPrices {
    fn default() -> Self {
        FuelPrices {
            petrol: DEFAULT_PETROL_PRICE,
            diesel: DEFAULT_DIESEL_PRICE,
        }
    }
}

impl FuelPrices {
    pub fn price_for(&self, fuel_type: FuelType) -> f64 {
        match fuel_type {
            FuelType::Petrol => self.petrol,
            FuelType::Diesel => self.diesel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("distance step must be greater than zero")]
    ZeroStep,
    #[error("maximum distance must be greater than zero")]
    ZeroDistance,
    #[error("range yields {count} samples per car, limit is {limit}")]
    TooManySamples { count: u64, limit: u64 },
}

/// Sampling grid `[0, max_distance_km]` with a fixed step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingRange {
    pub max_distance_km: u32,
    pub step_km: u32,
}

impl Default for SamplingRange {
    fn default() -> Self {
        SamplingRange {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            step_km: DEFAULT_STEP_KM,
        }
    }
}

impl SamplingRange {
    pub fn new(max_distance_km: u32, step_km: u32) -> Result<Self, RangeError> {
        SamplingRange {
            max_distance_km,
            step_km,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, RangeError> {
        if self.step_km == 0 {
            return Err(RangeError::ZeroStep);
        }
        if self.max_distance_km == 0 {
            return Err(RangeError::ZeroDistance);
        }
        let count = self.samples_u64();
        if count > MAX_SAMPLES {
            return Err(RangeError::TooManySamples {
                count,
                limit: MAX_SAMPLES,
            });
        }
        Ok(self)
    }

    fn samples_u64(&self) -> u64 {
        match self.step_km {
            0 => 1,
            step => u64::from(self.max_distance_km / step) + 1,
        }
    }

    /// floor(max / step) + 1; both ends inclusive when the step divides the range.
    pub fn sample_count(&self) -> usize {
        self.samples_u64() as usize
    }

    pub fn distances(&self) -> impl Iterator<Item = u32> {
        let step = self.step_km;
        (0..self.sample_count()).map(move |i| i as u32 * step)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CostPoint {
    pub distance_km: u32,
    pub cost: f64,
}

/// Sampled total-cost line of one car, ready for plotting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostCurve {
    pub label: String,
    pub color: String,
    pub points: Vec<CostPoint>,
}

/// Costs of every car at one distance, indexed like the car list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostSample {
    pub distance_km: u32,
    pub costs: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BreakEven {
    pub car_a: String,
    pub car_b: String,
    pub distance_km: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub curves: Vec<CostCurve>,
    pub break_evens: Vec<BreakEven>,
}

#[derive(Props, Clone, PartialEq)]
pub struct CarRowProps {
    pub index: usize,
    pub car: Car,
    pub can_remove: bool,
    pub cars: Signal<CarList>,
}

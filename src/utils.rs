// Form coercion, labels and number formatting

use crate::models::Car;

/// Turns a form field into a number. Empty, garbage and non-finite input all
/// become 0; a decimal comma is accepted.
pub fn parse_decimal(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Label used in the break-even list: the entered name or "Car N" (1-based).
pub fn display_label(car: &Car, index: usize) -> String {
    if car.name.is_empty() {
        format!("Car {}", index + 1)
    } else {
        car.name.clone()
    }
}

/// Label used in the chart legend. Unnamed rows show "No car" here, unlike
/// `display_label`.
pub fn legend_label(car: &Car) -> String {
    if car.name.is_empty() {
        "No car".to_string()
    } else {
        car.name.clone()
    }
}

pub fn line_hue(index: usize) -> usize {
    (index * 60) % 360
}

pub fn line_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", line_hue(index))
}

/// 1234567 -> "1,234,567"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Nearest whole number, signed, with thousands separators: -1500.2 -> "-1,500".
pub fn format_whole(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, format_thousands(rounded.abs() as u64))
}

/// Whole euros with thousands separators, e.g. "27,165 €".
pub fn format_euros(amount: f64) -> String {
    format!("{} €", format_whole(amount))
}

pub fn format_km(distance_km: u64) -> String {
    format!("{} km", format_thousands(distance_km))
}

use crate::seat::SeatClass;

/// Fare for a seat class, in minor currency units, rounded to the nearest unit.
pub fn fare_cents(base_price_cents: i64, class: SeatClass) -> i64 {
    (base_price_cents as f64 * class.price_multiplier()).round() as i64
}

/// Renders minor units as a dollar amount, e.g. `89999` -> `$899.99`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

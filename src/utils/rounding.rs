/// Round to two decimal places, ties away from zero (`f64::round`
/// semantics on the cent scale).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-fraction-digit string of the cent-rounded value.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

pub fn ceil_to_int(value: f64) -> i64 {
    value.ceil() as i64
}

pub mod group_dinner;
pub mod matching;
pub mod menu;
pub mod taste;
pub mod user;

use rust_decimal::Decimal;

/// Decimal columns cross the API boundary as plain JSON numbers.
pub(crate) fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}

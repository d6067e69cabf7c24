//! Money formatting for tables and statistics.
//!
//! Costs are always shown with two decimals and the configured currency
//! symbol in front, e.g. `R$ 1700.50`.
//!
//! ```rust
//! use taskbook::libs::formatter::format_cost;
//!
//! assert_eq!(format_cost(1700.5, "R$"), "R$ 1700.50");
//! assert_eq!(format_cost(0.0, "€"), "€ 0.00");
//! ```

/// Formats `cost` as `"<currency> <amount>"` with two decimal places.
///
/// An empty currency symbol yields the bare amount.
pub fn format_cost(cost: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", cost)
    } else {
        format!("{} {:.2}", currency, cost)
    }
}

/// Returns `true` when a task of this cost should stand out in the list.
pub fn is_highlighted(cost: f64, threshold: f64) -> bool {
    cost >= threshold
}

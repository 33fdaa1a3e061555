use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimal places: 15.50, -3.25, 0.00
/// Midpoints round away from zero.
pub fn amount(value: Decimal) -> String {
    let mut v = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(2);
    v.to_string()
}

/// Format a byte count for humans: 512 B, 4.2 KB, 1.1 MB
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

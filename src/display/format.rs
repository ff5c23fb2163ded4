//! Formatting helpers for terminal output

use crate::models::round_cents;

/// Format a currency value rounded to cents, sign before the symbol
pub fn format_amount(value: f64, symbol: &str) -> String {
    let rounded = round_cents(value);
    if rounded < 0.0 {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        // abs() also folds -0.0 into 0.00
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude > 0.0 && magnitude < 0.1 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(180.0, "$"), "$180.00");
        assert_eq!(format_amount(-12.346, "S/ "), "-S/ 12.35");
        assert_eq!(format_amount(0.0125, "$"), "$0.01");
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(36.0), "36%");
        assert_eq!(format_percentage(-50.0), "-50%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(-10.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}

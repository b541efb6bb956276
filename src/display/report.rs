//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the plain-text summary and the
//! dashboard widgets.

use crate::reports::Stats;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 && pct.fract() != 0.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// The "Queda el X%" line under the remaining-balance figure
pub fn format_remaining_share(stats: &Stats) -> String {
    format!("Queda el {:.1}%", stats.remaining_percentage())
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

/// Pad or shorten `s` to exactly `width` characters
pub fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        format!("{}{}", s, " ".repeat(width - len))
    } else if width <= 3 {
        s.chars().take(width).collect()
    } else {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(100.0), "100%");
        assert_eq!(format_percentage(2.5), "2.5%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.0), "5%");
    }

    #[test]
    fn test_remaining_share() {
        let stats = Stats {
            total_budget: Money::from_cents(170_000),
            total_spent: Money::from_cents(6_295),
            total_remaining: Money::from_cents(163_705),
        };
        assert_eq!(format_remaining_share(&stats), "Queda el 96.3%");

        let untouched = Stats {
            total_budget: Money::from_cents(170_000),
            total_spent: Money::zero(),
            total_remaining: Money::from_cents(170_000),
        };
        assert_eq!(format_remaining_share(&untouched), "Queda el 100.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Gym", 5), "Gym  ");
        assert_eq!(fit("Portátil", 8), "Portátil");
        assert_eq!(fit("Red Dead Redemption 2", 10), "Red Dea...");
    }
}

//! Core display formatting
//!
//! The engine's contract is deliberately small: zero and empty collapse
//! to `"0"`, negative values are wrapped in parentheses, everything else
//! passes through untouched. Locale grouping and exponential fallback are
//! display-layer concerns built on top of this rule.

/// Format a numeric string for the primary display
pub fn format_display(value: &str) -> String {
    if value.is_empty() || value == "0" {
        return "0".to_string();
    }
    if value.starts_with('-') {
        return format!("({value})");
    }
    value.to_string()
}

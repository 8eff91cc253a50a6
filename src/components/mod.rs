pub mod metric_card;
pub mod sidebar;
pub mod subscription_editor;
pub mod subscription_table;

/// Format a currency amount for display. Non-finite values (the sentinel an
/// unparseable amount entry leaves behind) render as a placeholder instead
/// of "NaN".
pub fn format_usd(value: f64) -> String {
    if value.is_finite() {
        format!("${:.2}", value)
    } else {
        "--".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_rounds_to_cents() {
        assert_eq!(format_usd(94.96), "$94.96");
        assert_eq!(format_usd(500.0), "$500.00");
        assert_eq!(format_usd(5.999), "$6.00");
    }

    #[test]
    fn test_format_usd_masks_non_finite_values() {
        assert_eq!(format_usd(f64::NAN), "--");
        assert_eq!(format_usd(f64::INFINITY), "--");
    }
}

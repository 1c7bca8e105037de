//! Formatting helpers for prices and readings.

/// `2150` -> `"₹2,150"`.
pub fn format_rupees(amount: u32) -> String {
    format!("₹{}", group_thousands(u64::from(amount)))
}

/// Absolute price movement. Falling prices show no sign; the percentage carries it.
pub fn format_price_delta(delta: i64) -> String {
    let sign = if delta >= 0 { "+" } else { "" };
    format!("{sign}₹{}", group_thousands(delta.unsigned_abs()))
}

/// One-decimal signed percentage, e.g. `+2.4%` or `-0.9%`.
pub fn format_percent_change(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

pub fn format_celsius(value: i32) -> String {
    format!("{value}°C")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_are_grouped_by_thousands() {
        assert_eq!(format_rupees(800), "₹800");
        assert_eq!(format_rupees(2150), "₹2,150");
        assert_eq!(format_rupees(1_234_567), "₹1,234,567");
    }

    #[test]
    fn deltas_keep_the_original_sign_convention() {
        assert_eq!(format_price_delta(50), "+₹50");
        assert_eq!(format_price_delta(0), "+₹0");
        assert_eq!(format_price_delta(-15), "₹15");
    }

    #[test]
    fn percentages_use_one_decimal() {
        assert_eq!(format_percent_change(2.3809), "+2.4%");
        assert_eq!(format_percent_change(-0.884), "-0.9%");
        assert_eq!(format_percent_change(0.0), "+0.0%");
    }
}

//! USD and number formatting for reports.

/// `$1,234` below a million, `$1.23M` from a million up.
///
/// Negatives put the minus before the dollar sign in both forms (`-$65,000`,
/// `-$2.50M`), matching how `Intl` currency formatting writes them.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let sign = if amount < 0.0 && amount.round() != 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    if magnitude >= 1_000_000.0 {
        format!("{sign}${:.2}M", magnitude / 1_000_000.0)
    } else {
        format!("{sign}${}", group_thousands(magnitude.round()))
    }
}

/// Thousands-grouped, no decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(rounded.abs()))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Payback period with one decimal, or `never`.
pub fn format_months(months: Option<f64>) -> String {
    match months {
        Some(m) => format!("{m:.1}"),
        None => "never".to_string(),
    }
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
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
    fn test_currency_below_a_million() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(115_000.0), "$115,000");
        assert_eq!(format_currency(999_999.0), "$999,999");
    }

    #[test]
    fn test_currency_in_millions() {
        assert_eq!(format_currency(1_000_000.0), "$1.00M");
        assert_eq!(format_currency(3_299_375.0), "$3.30M");
        assert_eq!(format_currency(-2_500_000.0), "-$2.50M");
        assert!(!format_currency(-1_250_000.0).contains("$-"));
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(-65_000.0), "-$65,000");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_number_and_percent() {
        assert_eq!(format_number(6562.5), "6,563");
        assert_eq!(format_number(-1234.0), "-1,234");
        assert_eq!(format_percent(2869.02), "2,869%");
        assert_eq!(format_number(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_months() {
        assert_eq!(format_months(Some(0.2728)), "0.3");
        assert_eq!(format_months(None), "never");
    }
}

//! Display formatting for money, margins and dates.

use chrono::NaiveDate;

/// `1150000` → `"1 150 000 ₽"`.
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} ₽")
}

pub fn optional_money(amount: Option<i64>) -> String {
    amount.map(money).unwrap_or_else(|| "-".to_string())
}

/// Percent with one decimal, `-` when absent.
pub fn margin(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| "-".to_string())
}

pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_groups_thousands() {
        assert_eq!(money(0), "0 ₽");
        assert_eq!(money(950), "950 ₽");
        assert_eq!(money(1_150_000), "1 150 000 ₽");
        assert_eq!(money(-42_000), "-42 000 ₽");
        assert_eq!(optional_money(None), "-");
    }

    #[test]
    fn test_margin_and_date() {
        assert_eq!(margin(Some(16.75)), "16.8%");
        assert_eq!(margin(None), "-");
        assert_eq!(date(NaiveDate::from_ymd_opt(2024, 3, 1)), "01.03.2024");
    }
}

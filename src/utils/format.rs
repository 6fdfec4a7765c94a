//! Presentation helpers for amounts, dates, and percentages.

use chrono::NaiveDate;

/// Formats an amount the way an en-US locale renders currency: symbol,
/// thousands separators, and the currency's minor units (`$1,234.50`).
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let digits = group_thousands(amount.abs(), minor_units(&code));
    let has_value = digits.chars().any(|c| matches!(c, '1'..='9'));
    let sign = if amount < 0.0 && has_value { "-" } else { "" };
    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code} {digits}"),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        _ => None,
    }
}

fn minor_units(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };
    let len = integer.len();
    let mut out = String::with_capacity(formatted.len() + len / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `08/1/2023`
    Short,
    /// `August 1, 2023`
    #[default]
    Medium,
    /// `August 1, 2023`
    Long,
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Short => date.format("%m/%-d/%Y").to_string(),
        DateStyle::Medium | DateStyle::Long => date.format("%B %-d, %Y").to_string(),
    }
}

/// Share of `total` consumed by `used`, rounded and clamped to `0..=100`.
/// A non-positive total yields 0.
pub fn calculate_percentage(used: f64, total: f64) -> u32 {
    if total <= 0.0 || !used.is_finite() {
        return 0;
    }
    round_half_up(used / total * 100.0).clamp(0.0, 100.0) as u32
}

/// Rounds halves toward positive infinity, matching how the displayed
/// percentages are rounded (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// Parsing and formatting helpers.
//
// All the forgiving CSV cell handling lives here so the stages can work with
// typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Parse a sales cell into `f64`.
///
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters (`N/A`, `unknown`).
/// - Strips thousands separators before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(',', "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_u32_safe(s: Option<&str>) -> Option<u32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<u32>().ok()
}

/// Parse a release year into January 1st of that year.
///
/// Accepts exactly four digits, optionally followed by `.0` as written by
/// exports that stored the column as a float.
pub fn parse_year(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let digits = s.strip_suffix(".0").unwrap_or(s);
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Trim a text cell, treating an empty one as absent.
pub fn clean_text(s: Option<String>) -> Option<String> {
    let s = s?;
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals with locale-aware thousands separators (`1,234.56`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

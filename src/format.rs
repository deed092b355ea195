//! Pattern-token date formatting.
//!
//! Renders a date against caller-supplied pattern tokens (`YYYY`, `MM`,
//! `DD`, `MMM`, `MMMM`, `dddd`, ...). Name tokens read the active
//! [`Locale`] tables; numeric tokens read the date components directly.
//! Longest token wins, anything else is copied through verbatim.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

/// Formats `date` according to `pattern` with the given locale's names.
pub fn format_pattern(date: NaiveDate, pattern: &str, lang: &Locale) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some((text, len)) = render_token(date, rest, lang) {
            out.push_str(&text);
            rest = &rest[len..];
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn render_token(date: NaiveDate, rest: &str, lang: &Locale) -> Option<(String, usize)> {
    let month_idx = date.month0() as usize;
    let weekday_idx = date.weekday().num_days_from_sunday() as usize;

    if rest.starts_with("YYYY") {
        return Some((format!("{:04}", date.year()), 4));
    }
    if rest.starts_with("MMMM") {
        return Some((lang.months[month_idx].to_owned(), 4));
    }
    if rest.starts_with("dddd") {
        return Some((lang.weekdays[weekday_idx].to_owned(), 4));
    }
    if rest.starts_with("MMM") {
        return Some((lang.months_short[month_idx].to_owned(), 3));
    }
    if rest.starts_with("ddd") {
        return Some((lang.weekdays_short[weekday_idx].to_owned(), 3));
    }
    if rest.starts_with("YY") {
        return Some((format!("{:02}", date.year().rem_euclid(100)), 2));
    }
    if rest.starts_with("MM") {
        return Some((format!("{:02}", date.month()), 2));
    }
    if rest.starts_with("DD") {
        return Some((format!("{:02}", date.day()), 2));
    }
    if rest.starts_with('M') {
        return Some((date.month().to_string(), 1));
    }
    if rest.starts_with('D') {
        return Some((date.day().to_string(), 1));
    }
    None
}

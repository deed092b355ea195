mod compare;
mod consts;
mod format;
mod locale;
mod month;
mod prelude;
mod range;
mod select;
mod types;

pub use compare::{
    AllowedCheck, are_same_dates, is_after_date, is_before_date, is_between_dates, is_date_after,
    is_date_allowed, is_date_today,
};
pub use consts::*;
pub use format::format_pattern;
pub use locale::{
    EN, ES, FR, LOCALES, Locale, LocaleConfig, get_months, get_week_days, locale_for_tag,
};
pub use month::MonthPage;
pub use range::{
    RangeError, SelectionRange, generate_date_range, generate_date_range_without_disabled,
    get_range_dates_formatted,
};
pub use select::{
    FormattedRange, InitOptions, convert_quarter_to_month, generate_date, generate_date_formatted,
    generate_date_with_year_and_month, generate_month_and_year, get_default_header_format,
    get_default_input_format, get_default_output_format, init_date, init_date_range,
    transform_date_for_model, transform_range_for_model,
};
pub use types::{Granularity, MonthYear, SelectionMode, Unit};

use crate::prelude::*;
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable calendar date carrying the locale used for formatting.
///
/// Wraps a [`chrono::NaiveDate`]; every operation is pure and returns a
/// new value. Equality, ordering and hashing consider the calendar date
/// only — the locale is formatting metadata.
#[derive(Debug, Clone, Copy)]
pub struct PickerDate {
    date: NaiveDate,
    lang: &'static Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl PickerDate {
    pub const fn new(date: NaiveDate, lang: &'static Locale) -> Self {
        Self { date, lang }
    }

    /// Builds a date from calendar components (1-indexed month) with the
    /// English locale. Returns `None` for an impossible combination.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self::new(date, &EN))
    }

    /// The current local calendar day, English locale.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive(), &EN)
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn locale(&self) -> &'static Locale {
        self.lang
    }

    /// Same instant, formatting rebound to another locale.
    pub const fn with_locale(&self, lang: &'static Locale) -> Self {
        Self::new(self.date, lang)
    }

    /// Renders the date against pattern tokens (`YYYY`, `MM`, `MMM`, ...)
    /// using this value's locale tables.
    pub fn format(&self, pattern: &str) -> String {
        format::format_pattern(self.date, pattern, self.lang)
    }

    /// Returns one calendar component. Months are 0-indexed, matching
    /// the page container convention.
    pub fn get(&self, unit: Unit) -> i32 {
        match unit {
            Unit::Day => self.date.day() as i32,
            Unit::Month => self.date.month0() as i32,
            Unit::Year => self.date.year(),
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// 0-indexed month (January = 0).
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_same(&self, other: &Self, granularity: Granularity) -> bool {
        compare::truncate(self.date, granularity) == compare::truncate(other.date, granularity)
    }

    pub fn is_before(&self, other: &Self, granularity: Granularity) -> bool {
        compare::truncate(self.date, granularity) < compare::truncate(other.date, granularity)
    }

    pub fn is_after(&self, other: &Self, granularity: Granularity) -> bool {
        compare::truncate(self.date, granularity) > compare::truncate(other.date, granularity)
    }

    /// First day covered by the unit this date falls in.
    pub fn start_of(&self, unit: Unit) -> Self {
        let date = match unit {
            Unit::Day => self.date,
            Unit::Month => first_of_month(self.date.year(), self.date.month()),
            Unit::Year => first_of_month(self.date.year(), 1),
        };
        Self::new(date, self.lang)
    }

    /// Last day covered by the unit this date falls in.
    pub fn end_of(&self, unit: Unit) -> Self {
        let date = match unit {
            Unit::Day => self.date,
            Unit::Month => last_of_month(self.date.year(), self.date.month()),
            Unit::Year => last_of_month(self.date.year(), 12),
        };
        Self::new(date, self.lang)
    }

    /// Shifts by `amount` units; negative amounts shift backwards.
    /// Saturates at the calendar bounds instead of failing.
    pub fn add(&self, amount: i32, unit: Unit) -> Self {
        let date = match unit {
            Unit::Day => shift_days(self.date, i64::from(amount)),
            Unit::Month => shift_months(self.date, i64::from(amount)),
            Unit::Year => shift_months(self.date, i64::from(amount) * 12),
        };
        Self::new(date, self.lang)
    }

    pub fn subtract(&self, amount: i32, unit: Unit) -> Self {
        self.add(amount.saturating_neg(), unit)
    }
}

impl PartialEq for PickerDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for PickerDate {}

impl PartialOrd for PickerDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PickerDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for PickerDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl From<NaiveDate> for PickerDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date, &EN)
    }
}

impl fmt::Display for PickerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl FromStr for PickerDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_partial(s).map(|date| Self::new(date, &EN))
    }
}

impl serde::Serialize for PickerDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PickerDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Raw input accepted wherever the widget hands dates in: ISO-like text
/// (`YYYY`, `YYYY-M`, `YYYY-M-D`), a native date, an already-wrapped
/// [`PickerDate`], or a bare year number.
#[derive(Debug, Clone, PartialEq, From)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
    Wrapped(PickerDate),
    Year(i32),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl DateInput {
    /// Resolves the raw input to a concrete day. Partial inputs resolve
    /// to their first day; malformed input degrades to `None`.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Text(s) => parse_partial(s).ok(),
            Self::Date(date) => Some(*date),
            Self::Wrapped(picker) => Some(picker.date()),
            Self::Year(year) => NaiveDate::from_ymd_opt(*year, 1, 1),
        }
    }
}

/// Raw `{start, end}` input for range selections. Either endpoint may be
/// absent; ordering is never enforced — callers hold inverted ranges
/// while a selection is in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeInput {
    pub start: Option<DateInput>,
    pub end: Option<DateInput>,
}

impl RangeInput {
    pub fn new(start: impl Into<DateInput>, end: impl Into<DateInput>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    pub const fn from_parts(start: Option<DateInput>, end: Option<DateInput>) -> Self {
        Self { start, end }
    }
}

/// Parses ISO-like input with 1 to 3 `-`-separated components: a bare
/// year, `year-month`, or `year-month-day`. Missing components resolve
/// to their first value (January, day 1).
pub(crate) fn parse_partial(input: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let (year, month, day) = match parts.len() {
        1 => (parse_year(parts[0])?, 1, 1),
        2 => (parse_year(parts[0])?, parse_month(parts[1])?, 1),
        3 => (
            parse_year(parts[0])?,
            parse_month(parts[1])?,
            parse_component(parts[2])?,
        ),
        _ => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDay { year, month, day })
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    let year = s
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ParseError::InvalidYear(year));
    }
    Ok(year)
}

fn parse_month(s: &str) -> Result<u32, ParseError> {
    let month = parse_component(s)?;
    if !(1..=MONTHS_IN_YEAR).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }
    Ok(month)
}

fn parse_component(s: &str) -> Result<u32, ParseError> {
    s.parse::<u32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// First day of a 1-indexed month. Callers pass validated components;
/// the fallback keeps the function total for the clippy panic gates.
pub(crate) fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// Last day of a 1-indexed month.
pub(crate) fn last_of_month(year: i32, month: u32) -> NaiveDate {
    let next = if month >= MONTHS_IN_YEAR {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.pred_opt().unwrap_or(next)
}

fn shift_days(date: NaiveDate, amount: i64) -> NaiveDate {
    let days = Days::new(amount.unsigned_abs());
    let shifted = if amount >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    shifted.unwrap_or(date)
}

fn shift_months(date: NaiveDate, amount: i64) -> NaiveDate {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).unwrap_or(u32::MAX));
    let shifted = if amount >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, naive};

    #[test]
    fn test_parse_full_date() {
        let parsed = "2019-5-16".parse::<PickerDate>().unwrap();
        assert_eq!(parsed, date(2019, 5, 16));
        assert_eq!(parsed.year(), 2019);
        assert_eq!(parsed.month0(), 4);
        assert_eq!(parsed.day(), 16);
    }

    #[test]
    fn test_parse_month_resolves_to_first_day() {
        let parsed = "2019-05".parse::<PickerDate>().unwrap();
        assert_eq!(parsed, date(2019, 5, 1));
    }

    #[test]
    fn test_parse_year_resolves_to_january_first() {
        let parsed = "2019".parse::<PickerDate>().unwrap();
        assert_eq!(parsed, date(2019, 1, 1));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = " 2019 - 05 - 16 ".parse::<PickerDate>().unwrap();
        assert_eq!(parsed, date(2019, 5, 16));
    }

    #[test]
    fn test_parse_invalid_month() {
        let result = "2019-13".parse::<PickerDate>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_parse_invalid_day() {
        let result = "2019-02-30".parse::<PickerDate>();
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_parse_leap_year() {
        assert!("2020-02-29".parse::<PickerDate>().is_ok());
        assert!("2021-02-29".parse::<PickerDate>().is_err());
        assert!("1900-02-29".parse::<PickerDate>().is_err());
        assert!("2000-02-29".parse::<PickerDate>().is_ok());
    }

    #[test]
    fn test_parse_year_bounds() {
        assert!(matches!(
            "0".parse::<PickerDate>(),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            "10000".parse::<PickerDate>(),
            Err(ParseError::InvalidYear(10000))
        ));
        assert!("9999".parse::<PickerDate>().is_ok());
        assert!("1".parse::<PickerDate>().is_ok());
    }

    #[test]
    fn test_parse_bad_tokens() {
        assert!(matches!(
            "20AB".parse::<PickerDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2019-XX-01".parse::<PickerDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "".parse::<PickerDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2019-01-02-03".parse::<PickerDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(date(2019, 5, 16).to_string(), "2019-05-16");
        assert_eq!(date(33, 1, 2).to_string(), "0033-01-02");
    }

    #[test]
    fn test_format_round_trip() {
        let value = date(2019, 5, 6);
        assert_eq!(value.format("YYYY-MM-DD"), "2019-05-06");
        assert_eq!(
            value.format("YYYY-MM-DD").parse::<PickerDate>().unwrap(),
            value
        );
    }

    #[test]
    fn test_get_components() {
        let value = date(2019, 5, 16);
        assert_eq!(value.get(Unit::Year), 2019);
        assert_eq!(value.get(Unit::Month), 4);
        assert_eq!(value.get(Unit::Day), 16);
    }

    #[test]
    fn test_start_and_end_of() {
        let value = date(2019, 5, 16);
        assert_eq!(value.start_of(Unit::Month), date(2019, 5, 1));
        assert_eq!(value.end_of(Unit::Month), date(2019, 5, 31));
        assert_eq!(value.start_of(Unit::Year), date(2019, 1, 1));
        assert_eq!(value.end_of(Unit::Year), date(2019, 12, 31));
        assert_eq!(value.start_of(Unit::Day), value);
    }

    #[test]
    fn test_end_of_month_february() {
        assert_eq!(date(2020, 2, 10).end_of(Unit::Month), date(2020, 2, 29));
        assert_eq!(date(2021, 2, 10).end_of(Unit::Month), date(2021, 2, 28));
    }

    #[test]
    fn test_add_and_subtract() {
        let value = date(2019, 5, 16);
        assert_eq!(value.add(1, Unit::Day), date(2019, 5, 17));
        assert_eq!(value.add(-16, Unit::Day), date(2019, 4, 30));
        assert_eq!(value.add(2, Unit::Month), date(2019, 7, 16));
        assert_eq!(value.subtract(5, Unit::Month), date(2018, 12, 16));
        assert_eq!(value.add(1, Unit::Year), date(2020, 5, 16));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(date(2019, 1, 31).add(1, Unit::Month), date(2019, 2, 28));
        assert_eq!(date(2020, 1, 31).add(1, Unit::Month), date(2020, 2, 29));
    }

    #[test]
    fn test_comparisons_by_granularity() {
        let a = date(2019, 1, 2);
        let b = date(2019, 3, 2);
        assert!(a.is_before(&b, Granularity::Date));
        assert!(a.is_same(&b, Granularity::Year));
        assert!(!a.is_same(&b, Granularity::Month));
        assert!(b.is_after(&a, Granularity::Month));
    }

    #[test]
    fn test_equality_ignores_locale() {
        let en = date(2019, 5, 16);
        let fr = en.with_locale(&FR);
        assert_eq!(en, fr);
        assert_eq!(fr.locale().tag, "fr");
        assert_eq!(fr.date(), en.date());
    }

    #[test]
    fn test_input_resolution() {
        assert_eq!(
            DateInput::from("2019-5-16").to_date(),
            Some(naive(2019, 5, 16))
        );
        assert_eq!(DateInput::from(2018).to_date(), Some(naive(2018, 1, 1)));
        assert_eq!(
            DateInput::from(naive(2019, 5, 16)).to_date(),
            Some(naive(2019, 5, 16))
        );
        assert_eq!(
            DateInput::from(date(2019, 5, 16)).to_date(),
            Some(naive(2019, 5, 16))
        );
        assert_eq!(DateInput::from("not a date").to_date(), None);
    }

    #[test]
    fn test_serde_string_format() {
        let value = date(2019, 5, 16);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""2019-05-16""#);
        let parsed: PickerDate = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_serde_validation() {
        assert!(serde_json::from_str::<PickerDate>(r#""2024-13""#).is_err());
        assert!(serde_json::from_str::<PickerDate>(r#""2024-01-32""#).is_err());
        assert!(serde_json::from_str::<PickerDate>(r#""2024-02""#).is_ok());
    }
}

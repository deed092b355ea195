//! Selection-mode helpers: turning raw widget input into dates and
//! dates back into model values, plus the default-format lookups.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEADER_FORMATS, DEFAULT_INPUT_FORMATS, DEFAULT_OUTPUT_FORMATS, MAX_YEAR, MIN_YEAR,
    MONTHS_IN_YEAR, MONTHS_PER_QUARTER,
};
use crate::locale::{EN, Locale, LocaleConfig};
use crate::range::SelectionRange;
use crate::types::{MonthYear, SelectionMode, Unit};
use crate::{DateInput, PickerDate, RangeInput, first_of_month};

/// Options for [`init_date`] and [`init_date_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOptions {
    pub lang: &'static Locale,
    pub mode: SelectionMode,
}

impl InitOptions {
    pub const fn new(lang: &'static Locale) -> Self {
        Self {
            lang,
            mode: SelectionMode::Date,
        }
    }

    pub const fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for InitOptions {
    fn default() -> Self {
        Self::new(&EN)
    }
}

/// Resolves a single raw value into the widget's working date.
///
/// Absent or malformed input stays unset. In year mode the result is
/// normalized to the start of its year, so the year component always
/// equals the input year whatever the locale.
pub fn init_date(raw: Option<DateInput>, options: &InitOptions) -> Option<PickerDate> {
    let date = raw.as_ref()?.to_date()?;
    let picker = PickerDate::new(date, options.lang);
    Some(match options.mode {
        SelectionMode::Year => picker.start_of(Unit::Year),
        _ => picker,
    })
}

/// Resolves raw `{start, end}` input into the widget's working range.
/// Absent fields stay unset; nothing is reordered or validated.
pub fn init_date_range(raw: Option<RangeInput>, options: &InitOptions) -> SelectionRange {
    let Some(raw) = raw else {
        return SelectionRange::default();
    };
    let resolve = |endpoint: Option<DateInput>| {
        endpoint
            .and_then(|input| input.to_date())
            .map(|date| PickerDate::new(date, options.lang))
    };
    SelectionRange::new(resolve(raw.start), resolve(raw.end))
}

/// Same instant, formatting bound to the given locale.
pub fn generate_date(input: impl Into<DateInput>, locale: &LocaleConfig) -> Option<PickerDate> {
    input
        .into()
        .to_date()
        .map(|date| PickerDate::new(date, locale.lang))
}

/// Shorthand for [`generate_date`] followed by `format(pattern)`.
pub fn generate_date_formatted(
    input: impl Into<DateInput>,
    locale: &LocaleConfig,
    pattern: &str,
) -> Option<String> {
    generate_date(input, locale).map(|picker| picker.format(pattern))
}

/// Day 1 of the given 0-indexed month. Formatted with `YYYY-MM` the
/// result reads `year`-`month + 1`, zero-padded.
pub fn generate_date_with_year_and_month(year: i32, month: u32) -> PickerDate {
    let month = month % MONTHS_IN_YEAR;
    let year = year.clamp(MIN_YEAR, MAX_YEAR);
    PickerDate::new(first_of_month(year, month + 1), &EN)
}

/// Maps a quarter index (0-3) to its starting 0-indexed month.
pub const fn convert_quarter_to_month(quarter: u32) -> u32 {
    quarter * MONTHS_PER_QUARTER
}

/// Applies a picked grid cell to the current page coordinate.
///
/// Year mode replaces the year; quarter mode maps the quarter index to
/// its start month; month mode (and anything else) takes the value as
/// the 0-indexed month directly.
pub fn generate_month_and_year(value: i32, current: MonthYear, mode: SelectionMode) -> MonthYear {
    let cell = u32::try_from(value).unwrap_or(0);
    match mode {
        SelectionMode::Year => MonthYear::new(value, current.month),
        SelectionMode::Quarter => MonthYear::new(current.year, convert_quarter_to_month(cell)),
        _ => MonthYear::new(current.year, cell),
    }
}

/// Formats a single selection for the model value.
pub fn transform_date_for_model(date: &PickerDate, pattern: &str) -> String {
    date.format(pattern)
}

/// A range selection formatted for the model value. Unset endpoints are
/// left unset, never coerced to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Formats both endpoints of a range independently for the model value.
pub fn transform_range_for_model(range: &SelectionRange, pattern: &str) -> FormattedRange {
    FormattedRange {
        start: range.start.map(|date| date.format(pattern)),
        end: range.end.map(|date| date.format(pattern)),
    }
}

/// Default format for the widget's text input; unspecified or
/// unrecognized modes fall back to the `date` entry.
pub fn get_default_input_format(mode: Option<SelectionMode>) -> &'static str {
    DEFAULT_INPUT_FORMATS.for_mode(mode.unwrap_or_default())
}

/// Default format for the agenda header.
pub fn get_default_header_format(mode: Option<SelectionMode>) -> &'static str {
    DEFAULT_HEADER_FORMATS.for_mode(mode.unwrap_or_default())
}

/// Default format for the emitted model value.
pub fn get_default_output_format(mode: Option<SelectionMode>) -> &'static str {
    DEFAULT_OUTPUT_FORMATS.for_mode(mode.unwrap_or_default())
}

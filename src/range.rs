use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{RANGE_LABEL_SEPARATOR, UNSET_LABEL};
use crate::format::format_pattern;
use crate::locale::LocaleConfig;
use crate::{DateInput, ParseError, PickerDate, RangeInput};

/// A resolved range selection with independently optional endpoints.
///
/// Either endpoint may be unset while the user is mid-selection, and
/// `start <= end` is deliberately not enforced: the widget holds an
/// inverted pair between the first and second click. Generation over an
/// inverted range yields an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: Option<PickerDate>,
    pub end: Option<PickerDate>,
}

/// Error type for range label parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// No `~` separator between the endpoints.
    #[error("No range separator found in label: {0}")]
    MissingSeparator(String),

    /// More than one `~` separator.
    #[error("Too many range separators: expected 1, found {0}")]
    TooManySeparators(usize),

    /// Error parsing an endpoint.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SelectionRange {
    pub const fn new(start: Option<PickerDate>, end: Option<PickerDate>) -> Self {
        Self { start, end }
    }

    /// Both endpoints selected.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Neither endpoint selected.
    pub const fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |endpoint: Option<PickerDate>| {
            endpoint.map_or_else(|| UNSET_LABEL.to_owned(), |date| date.to_string())
        };
        write!(
            f,
            "{}{}{}",
            render(self.start),
            RANGE_LABEL_SEPARATOR,
            render(self.end)
        )
    }
}

impl FromStr for SelectionRange {
    type Err = RangeError;

    /// Parses a `"<start> ~ <end>"` label back into a range. The `__`
    /// placeholder maps to an unset endpoint; endpoint dates must be in
    /// ISO-like form (the default output format).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_LABEL_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::MissingSeparator(trimmed.to_owned())),
            1 => {
                let (start_str, end_str) = trimmed
                    .split_once(RANGE_LABEL_SEPARATOR)
                    .ok_or_else(|| RangeError::MissingSeparator(trimmed.to_owned()))?;
                Ok(Self::new(
                    parse_endpoint(start_str)?,
                    parse_endpoint(end_str)?,
                ))
            }
            found => Err(RangeError::TooManySeparators(found)),
        }
    }
}

fn parse_endpoint(s: &str) -> Result<Option<PickerDate>, RangeError> {
    let trimmed = s.trim();
    if trimmed == UNSET_LABEL {
        return Ok(None);
    }
    Ok(Some(trimmed.parse::<PickerDate>()?))
}

/// Ascending day steps from `start` through `end`, inclusive. Empty when
/// `end` precedes `start`.
pub(crate) fn day_sequence(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Expands `start..=end` into one [`PickerDate`] per day, ascending.
/// Unresolvable endpoints or an inverted pair produce an empty list.
pub fn generate_date_range(
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
) -> Vec<PickerDate> {
    let (Some(start), Some(end)) = (start.into().to_date(), end.into().to_date()) else {
        return Vec::new();
    };
    day_sequence(start, end).map(PickerDate::from).collect()
}

/// Expands a raw range day by day, dropping days strictly before
/// `min_date` or strictly after `max_date` when those bounds are given.
pub fn generate_date_range_without_disabled(
    range: &RangeInput,
    min_date: Option<DateInput>,
    max_date: Option<DateInput>,
) -> Vec<PickerDate> {
    let (Some(start), Some(end)) = (
        range.start.as_ref().and_then(DateInput::to_date),
        range.end.as_ref().and_then(DateInput::to_date),
    ) else {
        return Vec::new();
    };
    let min = min_date.as_ref().and_then(DateInput::to_date);
    let max = max_date.as_ref().and_then(DateInput::to_date);

    day_sequence(start, end)
        .filter(|day| min.is_none_or(|bound| *day >= bound))
        .filter(|day| max.is_none_or(|bound| *day <= bound))
        .map(PickerDate::from)
        .collect()
}

/// Renders a raw range as `"<start> ~ <end>"` in the given locale,
/// substituting `__` for any endpoint that is unset or unresolvable.
/// An unset range renders as `"__ ~ __"`.
pub fn get_range_dates_formatted(
    range: Option<&RangeInput>,
    locale: &LocaleConfig,
    pattern: &str,
) -> String {
    let render = |endpoint: Option<&DateInput>| {
        endpoint.and_then(DateInput::to_date).map_or_else(
            || UNSET_LABEL.to_owned(),
            |date| format_pattern(date, pattern, locale.lang),
        )
    };
    match range {
        Some(range) => format!(
            "{}{}{}",
            render(range.start.as_ref()),
            RANGE_LABEL_SEPARATOR,
            render(range.end.as_ref())
        ),
        None => format!("{UNSET_LABEL}{RANGE_LABEL_SEPARATOR}{UNSET_LABEL}"),
    }
}

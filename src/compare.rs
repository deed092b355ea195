//! Granularity comparisons and allow/bounds checks.
//!
//! Every function accepts raw input and degrades to `false` when a value
//! cannot be resolved or a reference is unset; nothing here returns an
//! error.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::DateInput;
use crate::types::Granularity;

/// Truncates a date to a comparable tuple at the given granularity.
/// Quarter truncates like month: quarter selections carry their start
/// month, so month equality is quarter equality.
pub(crate) fn truncate(date: NaiveDate, granularity: Granularity) -> (i32, u32, u32) {
    match granularity {
        Granularity::Date => (date.year(), date.month(), date.day()),
        Granularity::Month | Granularity::Quarter => (date.year(), date.month(), 1),
        Granularity::Year => (date.year(), 1, 1),
    }
}

/// Constraints for [`is_date_allowed`]: an optional predicate plus
/// inclusive min/max bounds, matching the widget's `allowed-dates`,
/// `min-date` and `max-date` props.
pub struct AllowedCheck<'a> {
    pub date: DateInput,
    pub allowed_fn: Option<&'a dyn Fn(NaiveDate) -> bool>,
    pub min_date: Option<DateInput>,
    pub max_date: Option<DateInput>,
}

impl fmt::Debug for AllowedCheck<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllowedCheck")
            .field("date", &self.date)
            .field("allowed_fn", &self.allowed_fn.map(|_| "<fn>"))
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .finish()
    }
}

impl<'a> AllowedCheck<'a> {
    pub fn new(date: impl Into<DateInput>) -> Self {
        Self {
            date: date.into(),
            allowed_fn: None,
            min_date: None,
            max_date: None,
        }
    }

    pub fn allowed_fn(mut self, predicate: &'a dyn Fn(NaiveDate) -> bool) -> Self {
        self.allowed_fn = Some(predicate);
        self
    }

    pub fn min_date(mut self, min: impl Into<DateInput>) -> Self {
        self.min_date = Some(min.into());
        self
    }

    pub fn max_date(mut self, max: impl Into<DateInput>) -> Self {
        self.max_date = Some(max.into());
        self
    }
}

/// Whether a date may be selected: `true` unless the predicate rejects
/// it or a supplied bound is violated. Bounds are inclusive — a date
/// equal to `min_date` or `max_date` is allowed.
pub fn is_date_allowed(check: &AllowedCheck<'_>) -> bool {
    let Some(date) = check.date.to_date() else {
        return false;
    };
    if check.allowed_fn.is_some_and(|allowed| !allowed(date)) {
        return false;
    }
    let min = check.min_date.as_ref().and_then(DateInput::to_date);
    let max = check.max_date.as_ref().and_then(DateInput::to_date);
    min.is_none_or(|bound| date >= bound) && max.is_none_or(|bound| date <= bound)
}

/// Whether the input falls on the current local calendar day.
pub fn is_date_today(input: impl Into<DateInput>) -> bool {
    input
        .into()
        .to_date()
        .is_some_and(|date| date == Local::now().date_naive())
}

/// Whether two inputs are the same at the given granularity
/// (defaulting to exact date).
pub fn are_same_dates(
    a: impl Into<DateInput>,
    b: impl Into<DateInput>,
    granularity: Option<Granularity>,
) -> bool {
    let granularity = granularity.unwrap_or_default();
    match (a.into().to_date(), b.into().to_date()) {
        (Some(a), Some(b)) => truncate(a, granularity) == truncate(b, granularity),
        _ => false,
    }
}

/// Strictly before the reference at the given granularity; `false` when
/// the reference is unset.
pub fn is_before_date(
    date: impl Into<DateInput>,
    reference: Option<DateInput>,
    granularity: Option<Granularity>,
) -> bool {
    let granularity = granularity.unwrap_or_default();
    let Some(reference) = reference.as_ref().and_then(DateInput::to_date) else {
        return false;
    };
    date.into()
        .to_date()
        .is_some_and(|date| truncate(date, granularity) < truncate(reference, granularity))
}

/// Strictly after the reference at the given granularity; `false` when
/// the reference is unset.
pub fn is_after_date(
    date: impl Into<DateInput>,
    reference: Option<DateInput>,
    granularity: Option<Granularity>,
) -> bool {
    let granularity = granularity.unwrap_or_default();
    let Some(reference) = reference.as_ref().and_then(DateInput::to_date) else {
        return false;
    };
    date.into()
        .to_date()
        .is_some_and(|date| truncate(date, granularity) > truncate(reference, granularity))
}

/// Strictly between `start` and `end`, both bounds exclusive.
pub fn is_between_dates(
    date: impl Into<DateInput>,
    start: impl Into<DateInput>,
    end: impl Into<DateInput>,
) -> bool {
    match (
        date.into().to_date(),
        start.into().to_date(),
        end.into().to_date(),
    ) {
        (Some(date), Some(start), Some(end)) => date > start && date < end,
        _ => false,
    }
}

/// Strict day-granularity "after" check; `false` when `other` is unset.
pub fn is_date_after(date: impl Into<DateInput>, other: Option<DateInput>) -> bool {
    is_after_date(date, other, Some(Granularity::Date))
}

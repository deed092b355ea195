//! One calendar page: a month/year pair with its derived display views.

use chrono::Datelike;

use crate::consts::{MAX_YEAR, MIN_YEAR, MONTHS_IN_YEAR, MONTHS_PER_QUARTER, QUARTERS_IN_YEAR};
use crate::locale::{EN, Locale};
use crate::range::day_sequence;
use crate::{PickerDate, first_of_month, last_of_month};

/// The dates backing one calendar-page view.
///
/// Constructed once per rendered page and immutable afterwards:
/// navigating to another month creates a new instance ([`prev`]/[`next`]).
/// `month` is 0-indexed; out-of-range input is normalized modulo 12 and
/// the year clamped to the supported bounds.
///
/// [`prev`]: MonthPage::prev
/// [`next`]: MonthPage::next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPage {
    /// 0-indexed month (January = 0).
    pub month: u32,
    pub year: i32,
    /// First day of the month.
    pub start: PickerDate,
    /// Last day of the month.
    pub end: PickerDate,
    lang: &'static Locale,
}

impl MonthPage {
    /// Builds the page for `(month, year)`. The locale is an explicit
    /// parameter defaulting to English — no environment detection.
    pub fn new(month: u32, year: i32, lang: Option<&'static Locale>) -> Self {
        let lang = lang.unwrap_or(&EN);
        let month = month % MONTHS_IN_YEAR;
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        Self {
            month,
            year,
            start: PickerDate::new(first_of_month(year, month + 1), lang),
            end: PickerDate::new(last_of_month(year, month + 1), lang),
            lang,
        }
    }

    pub const fn lang(&self) -> &'static Locale {
        self.lang
    }

    /// Weekday column (0-6) of the month's first day, adjusted to the
    /// locale's week start. Drives the leading blank cells of the grid.
    pub fn week_start(&self) -> u32 {
        let weekday = self.start.date().weekday().num_days_from_sunday();
        (weekday + 7 - self.lang.week_start) % 7
    }

    /// Every day of the month, ascending.
    pub fn days(&self) -> Vec<PickerDate> {
        day_sequence(self.start.date(), self.end.date())
            .map(|day| PickerDate::new(day, self.lang))
            .collect()
    }

    /// The 12 abbreviated month names for the page's locale. Constant
    /// regardless of the page's own month and year.
    pub const fn month_names(&self) -> [&'static str; 12] {
        self.lang.months_short
    }

    /// The 4 quarter labels, each naming its three-month span
    /// (`"January - March"`, ...), in calendar order.
    pub fn quarters(&self) -> Vec<String> {
        (0..QUARTERS_IN_YEAR)
            .map(|quarter| {
                let first = (quarter * MONTHS_PER_QUARTER) as usize;
                let last = first + MONTHS_PER_QUARTER as usize - 1;
                format!("{} - {}", self.lang.months[first], self.lang.months[last])
            })
            .collect()
    }

    /// Localized full month name of the page's month.
    pub fn month_formatted(&self) -> String {
        self.start.format("MMMM")
    }

    /// 4-digit year of the page.
    pub fn year_formatted(&self) -> String {
        self.start.format("YYYY")
    }

    /// Ascending years from `center_year - radius` through
    /// `center_year + radius`, for year-picker grids.
    pub fn years_range(center_year: i32, radius: i32) -> Vec<i32> {
        let radius = radius.abs();
        (center_year.saturating_sub(radius)..=center_year.saturating_add(radius)).collect()
    }

    /// The page one month back, same locale.
    pub fn prev(&self) -> Self {
        if self.month == 0 {
            Self::new(MONTHS_IN_YEAR - 1, self.year - 1, Some(self.lang))
        } else {
            Self::new(self.month - 1, self.year, Some(self.lang))
        }
    }

    /// The page one month forward, same locale.
    pub fn next(&self) -> Self {
        if self.month >= MONTHS_IN_YEAR - 1 {
            Self::new(0, self.year + 1, Some(self.lang))
        } else {
            Self::new(self.month + 1, self.year, Some(self.lang))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FR;
    use crate::test_utils::date;

    #[test]
    fn test_page_spans_the_month() {
        let page = MonthPage::new(4, 2019, None);
        assert_eq!(page.month, 4);
        assert_eq!(page.year, 2019);
        assert_eq!(page.start, date(2019, 5, 1));
        assert_eq!(page.end, date(2019, 5, 31));
    }

    #[test]
    fn test_page_defaults_to_english() {
        let page = MonthPage::new(4, 2019, None);
        assert_eq!(page.lang().tag, "en");
    }

    #[test]
    fn test_february_end_respects_leap_years() {
        assert_eq!(MonthPage::new(1, 2020, None).end, date(2020, 2, 29));
        assert_eq!(MonthPage::new(1, 2021, None).end, date(2021, 2, 28));
    }

    #[test]
    fn test_week_start_offset() {
        // 2019-05-01 is a Wednesday
        let en = MonthPage::new(4, 2019, None);
        assert_eq!(en.week_start(), 3);

        // same first day, but the French week begins on Monday
        let fr = MonthPage::new(4, 2019, Some(&FR));
        assert_eq!(fr.week_start(), 2);
    }

    #[test]
    fn test_days_cover_the_month_ascending() {
        let page = MonthPage::new(4, 2019, None);
        let days = page.days();
        assert_eq!(days.len(), 31);
        let labels: Vec<String> = days.iter().map(|day| day.format("D")).collect();
        let expected: Vec<String> = (1..=31).map(|day| day.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_month_names_are_constant() {
        let page = MonthPage::new(4, 2019, None);
        assert_eq!(
            page.month_names(),
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(page.month_names(), MonthPage::new(0, 1993, None).month_names());
    }

    #[test]
    fn test_quarter_labels() {
        let page = MonthPage::new(4, 2019, None);
        assert_eq!(
            page.quarters(),
            [
                "January - March",
                "April - June",
                "July - September",
                "October - December",
            ]
        );
    }

    #[test]
    fn test_quarter_labels_localized() {
        let page = MonthPage::new(4, 2019, Some(&FR));
        assert_eq!(page.quarters()[0], "Janvier - Mars");
    }

    #[test]
    fn test_formatted_headers() {
        let page = MonthPage::new(4, 2019, None);
        assert_eq!(page.month_formatted(), "May");
        assert_eq!(page.year_formatted(), "2019");
        assert_eq!(MonthPage::new(4, 2019, Some(&FR)).month_formatted(), "Mai");
    }

    #[test]
    fn test_years_range() {
        assert_eq!(
            MonthPage::years_range(2018, 2),
            [2016, 2017, 2018, 2019, 2020]
        );
        assert_eq!(MonthPage::years_range(2018, 0), [2018]);
    }

    #[test]
    fn test_month_normalization() {
        let page = MonthPage::new(14, 2019, None);
        assert_eq!(page.month, 2);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let january = MonthPage::new(0, 2019, None);
        let december = january.prev();
        assert_eq!((december.month, december.year), (11, 2018));
        let back = december.next();
        assert_eq!((back.month, back.year), (0, 2019));

        let forward = MonthPage::new(11, 2019, Some(&FR)).next();
        assert_eq!((forward.month, forward.year), (0, 2020));
        assert_eq!(forward.lang().tag, "fr");
    }
}

use crate::types::SelectionMode;

/// Maximum year accepted from raw input and kept by page constructors (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Minimum year accepted from raw input and kept by page constructors (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Months per year, used to normalize 0-indexed month input
pub const MONTHS_IN_YEAR: u32 = 12;

/// Quarters per year
pub const QUARTERS_IN_YEAR: u32 = 4;

/// Months covered by one quarter
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Date component separator (ISO-like input)
pub const DATE_SEPARATOR: char = '-';

/// Separator placed between the endpoints of a formatted range label
pub const RANGE_LABEL_SEPARATOR: &str = " ~ ";

/// Placeholder rendered for an endpoint that has not been selected yet
pub const UNSET_LABEL: &str = "__";

/// Default format strings keyed by selection mode.
///
/// One table per context the widget formats for: the text input, the
/// agenda header, and the emitted model value. Lookups for an
/// unspecified or unrecognized mode fall back to the `date` entry via
/// [`SelectionMode::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefaults {
    pub date: &'static str,
    pub month: &'static str,
    pub quarter: &'static str,
    pub year: &'static str,
    pub range: &'static str,
}

impl FormatDefaults {
    /// Returns the format string for the given selection mode.
    pub const fn for_mode(&self, mode: SelectionMode) -> &'static str {
        match mode {
            SelectionMode::Date => self.date,
            SelectionMode::Month => self.month,
            SelectionMode::Quarter => self.quarter,
            SelectionMode::Year => self.year,
            SelectionMode::Range => self.range,
        }
    }
}

/// Formats applied to the widget's text input.
pub const DEFAULT_INPUT_FORMATS: FormatDefaults = FormatDefaults {
    date: "DD MMMM YYYY",
    month: "MMMM YYYY",
    quarter: "MMMM YYYY",
    year: "YYYY",
    range: "DD MMMM YYYY",
};

/// Formats applied to the agenda header above the grid.
pub const DEFAULT_HEADER_FORMATS: FormatDefaults = FormatDefaults {
    date: "dddd DD MMMM",
    month: "MMMM",
    quarter: "MMMM",
    year: "YYYY",
    range: "DD MMMM YYYY",
};

/// Formats applied to the value emitted when a selection is made.
pub const DEFAULT_OUTPUT_FORMATS: FormatDefaults = FormatDefaults {
    date: "YYYY-MM-DD",
    month: "YYYY-MM",
    quarter: "YYYY-MM",
    year: "YYYY",
    range: "YYYY-MM-DD",
};

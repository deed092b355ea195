use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Resolution for date arithmetic and truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Resolution for date comparisons.
///
/// `Quarter` compares by calendar month: quarter selections are
/// canonicalized to their start month (see
/// [`convert_quarter_to_month`](crate::convert_quarter_to_month)), so
/// month equality is quarter equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Granularity {
    #[default]
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
}

/// What the widget lets the user pick.
///
/// Governs the default format strings and which grid the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum SelectionMode {
    #[default]
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "range")]
    Range,
}

/// A calendar page coordinate handed back to the widget when a
/// year, quarter or month cell is picked. `month` is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

//! Month grids for a six-week, Sunday-first calendar view.

use chrono::{Datelike, NaiveDate};

use crate::constants::{DAYS_PER_WEEK, GRID_CELLS};
use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};

/// The cells of one month laid out over six weeks.
///
/// Each cell is either padding (`None`) or a day of the month. The first
/// real day sits in the column of its weekday, Sunday being column 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    /// The six rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Number of padding cells before day 1.
    pub fn leading_padding(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

fn first_of_month(year: i32, month0: u32) -> DaybookResult<NaiveDate> {
    if month0 > 11 {
        return Err(DaybookError::InvalidMonth(month0));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| DaybookError::InvalidDate(format!("{}-{:02}-01", year, month0 + 1)))
}

/// Number of days in a month: the day before the first of the next month.
pub fn days_in_month(year: i32, month0: u32) -> DaybookResult<u32> {
    let first = first_of_month(year, month0)?;
    let next_first = first
        .checked_add_months(chrono::Months::new(1))
        .ok_or_else(|| DaybookError::InvalidDate(first.to_string()))?;
    let last = next_first
        .pred_opt()
        .ok_or_else(|| DaybookError::InvalidDate(next_first.to_string()))?;
    Ok(last.day())
}

/// Build the 42-cell grid for `month0` (0 = January) of `year`.
pub fn month_grid(year: i32, month0: u32) -> DaybookResult<MonthGrid> {
    let first = first_of_month(year, month0)?;
    let padding = first.weekday().num_days_from_sunday() as usize;
    let last_day = days_in_month(year, month0)?;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.extend(std::iter::repeat_n(None, padding));
    cells.extend((1..=last_day).map(Some));
    cells.resize(GRID_CELLS, None);

    Ok(MonthGrid {
        year,
        month0,
        cells,
    })
}

/// The month currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> DaybookResult<Self> {
        first_of_month(year, month0)?;
        Ok(MonthCursor { year, month0 })
    }

    /// The month that contains `date`.
    pub fn containing(date: DateKey) -> Self {
        MonthCursor {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn prev(&self) -> Self {
        if self.month0 == 0 {
            MonthCursor {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month0 == 11 {
            MonthCursor {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            MonthCursor {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    pub fn grid(&self) -> DaybookResult<MonthGrid> {
        month_grid(self.year, self.month0)
    }

    /// Map a day-of-month cell back to its date key.
    pub fn date_of(&self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd0(self.year, self.month0, day)
    }

    /// e.g. "March 2025"
    pub fn label(&self) -> String {
        match first_of_month(self.year, self.month0) {
            Ok(first) => first.format("%B %Y").to_string(),
            Err(_) => format!("{}-{:02}", self.year, self.month0 + 1),
        }
    }
}

/// Name of the persistent record holding the whole event mapping.
pub const DEFAULT_STORAGE_KEY: &str = "events";

/// Cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

pub const DAYS_PER_WEEK: usize = 7;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub const TIME_FORMAT: &str = "%H:%M";

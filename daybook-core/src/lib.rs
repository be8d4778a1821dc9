//! Core of the daybook personal calendar.
//!
//! - `grid` lays a month out over a fixed six-week grid
//! - `store` keeps events keyed by day and persists them through a `storage` backend
//! - `overlap` and `validation` decide whether a new event may be added
//! - `index` is the selected day's view that a UI drives

pub mod config;
pub mod constants;
pub mod date_key;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod overlap;
pub mod storage;
pub mod store;
pub mod time_of_day;
pub mod validation;

pub use date_key::DateKey;
pub use error::{DaybookError, DaybookResult, Rejection};
pub use event::{Event, EventId, EventType};
pub use time_of_day::TimeOfDay;

pub mod add;
pub mod config;
pub mod day;
pub mod delete;
pub mod export;
pub mod month;

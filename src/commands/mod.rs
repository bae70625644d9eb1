//! Command implementations

pub mod check;
pub mod daily;
pub mod export;
pub mod simple;

pub use check::{CheckResult, check_guess, check_result_json};
pub use daily::{DailyInfo, daily_info};
pub use export::{ListKind, export_list};
pub use simple::{run_simple, run_simple_with};

pub mod error;
pub mod models;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::day_hours::DayHours;
pub use models::project::Project;
pub use models::session::Session;
pub use models::sprint::Sprint;
pub use models::task::Task;
pub use models::user::User;
pub use schedule::{
    MAX_YEAR, MIN_YEAR, derive_start_date, format_day, init_hours_per_day, parse_day,
    parse_day_lenient,
};

pub use error_location::ErrorLocation;

/// Planned hours per task, inclusive.
pub const MIN_HOURS_PLANNED: u8 = 1;
pub const MAX_HOURS_PLANNED: u8 = 8;

/// Wasted hours that can be recorded against a single day, inclusive.
pub const MIN_HOURS_PER_DAY: u8 = 0;
pub const MAX_HOURS_PER_DAY: u8 = 8;

pub const MIN_SPRINT_DURATION: u32 = 1;

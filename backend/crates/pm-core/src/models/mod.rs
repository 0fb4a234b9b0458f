pub mod day_hours;
pub mod project;
pub mod session;
pub mod sprint;
pub mod task;
pub mod user;

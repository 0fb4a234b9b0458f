pub mod error;
pub mod extractors;
pub mod ownership;
pub mod projects;
pub mod sprints;
pub mod tasks;
pub mod validation;

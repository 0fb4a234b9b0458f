pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;

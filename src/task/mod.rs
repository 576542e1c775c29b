pub mod task_models;
pub mod task_repository;
pub mod task_store;

pub use task_models::Task;
pub use task_repository::TaskRepository;
pub use task_store::TaskStore;

pub mod config;
pub mod service;
pub mod storage;
pub mod todo;

pub use config::{Backend, Config, ConfigError, LogConfig, StorageConfig};
pub use service::TodoService;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use todo::{Todo, TodoId};

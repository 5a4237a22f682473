#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, MockTestRepository, ProblemRepository, Storage, StorageError,
    SubjectRepository,
};
pub use sqlite::{SqliteInitError, SqliteRepository};

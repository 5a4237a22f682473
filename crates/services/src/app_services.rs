use std::sync::Arc;

use storage::repository::{Storage, StorageError};
use storage::sqlite::SqliteRepository;

use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::mock_test_service::MockTestService;
use crate::problem_service::ProblemService;
use crate::subject_service::SubjectService;

/// Assembles the tracker services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    gateway: Option<SqliteRepository>,
    problems: Arc<ProblemService>,
    subjects: Arc<SubjectService>,
    mock_tests: Arc<MockTestService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, creating the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the store cannot be opened or migrated.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let repo = SqliteRepository::connect(db_url).await?;
        repo.migrate().await?;
        let storage = Storage::from_sqlite(repo.clone());
        let mut services = Self::from_storage(&storage);
        services.gateway = Some(repo);
        Ok(services)
    }

    /// Build services over an arbitrary storage backend.
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            gateway: None,
            problems: Arc::new(ProblemService::new(Arc::clone(&storage.problems))),
            subjects: Arc::new(SubjectService::new(Arc::clone(&storage.subjects))),
            mock_tests: Arc::new(MockTestService::new(Arc::clone(&storage.mock_tests))),
            dashboard: Arc::new(DashboardService::new(
                Arc::clone(&storage.problems),
                Arc::clone(&storage.subjects),
                Arc::clone(&storage.mock_tests),
            )),
        }
    }

    #[must_use]
    pub fn problems(&self) -> Arc<ProblemService> {
        Arc::clone(&self.problems)
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    #[must_use]
    pub fn mock_tests(&self) -> Arc<MockTestService> {
        Arc::clone(&self.mock_tests)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    /// Check that the store is reachable. In-memory backends always are.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if no connection can be acquired.
    pub async fn ping(&self) -> Result<(), StorageError> {
        match &self.gateway {
            Some(repo) => repo.ping().await,
            None => Ok(()),
        }
    }

    /// Release the store. Call once the server has stopped.
    pub async fn shutdown(&self) {
        if let Some(repo) = &self.gateway {
            repo.close().await;
        }
    }
}

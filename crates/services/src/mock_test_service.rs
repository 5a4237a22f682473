use std::sync::Arc;

use prep_core::model::{MockTest, MockTestDraft, MockTestId};
use prep_core::progress::rounded_average;
use storage::repository::MockTestRepository;

use crate::error::MockTestServiceError;

/// Record mock test attempts and summarize their scores.
#[derive(Clone)]
pub struct MockTestService {
    mock_tests: Arc<dyn MockTestRepository>,
}

impl MockTestService {
    #[must_use]
    pub fn new(mock_tests: Arc<dyn MockTestRepository>) -> Self {
        Self { mock_tests }
    }

    /// # Errors
    ///
    /// Returns `MockTestServiceError::Draft` for missing fields or a
    /// non-numeric score.
    /// Returns `MockTestServiceError::Storage` if persistence fails.
    pub async fn create_mock_test(
        &self,
        draft: MockTestDraft,
    ) -> Result<MockTestId, MockTestServiceError> {
        let new = draft.validate()?;
        let id = self.mock_tests.insert_mock_test(new).await?;
        tracing::info!(%id, "mock test recorded");
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `MockTestServiceError::Storage` if repository access fails.
    pub async fn list_mock_tests(&self) -> Result<Vec<MockTest>, MockTestServiceError> {
        Ok(self.mock_tests.list_mock_tests().await?)
    }

    /// # Errors
    ///
    /// Returns `MockTestServiceError::Storage` if repository access fails.
    pub async fn delete_mock_test(&self, id: MockTestId) -> Result<(), MockTestServiceError> {
        self.mock_tests.delete_mock_test(id).await?;
        tracing::info!(%id, "mock test deleted");
        Ok(())
    }

    /// Average score rounded to two decimals; `None` when nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns `MockTestServiceError::Storage` if repository access fails.
    pub async fn average_score(&self) -> Result<Option<f64>, MockTestServiceError> {
        let average = self.mock_tests.average_score().await?;
        Ok(rounded_average(average))
    }
}

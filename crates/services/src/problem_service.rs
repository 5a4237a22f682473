use std::sync::Arc;

use prep_core::model::{Problem, ProblemDraft, ProblemFilter, ProblemId};
use storage::repository::ProblemRepository;

use crate::error::ProblemServiceError;

/// Create, list and delete tracked DSA problems.
#[derive(Clone)]
pub struct ProblemService {
    problems: Arc<dyn ProblemRepository>,
}

impl ProblemService {
    #[must_use]
    pub fn new(problems: Arc<dyn ProblemRepository>) -> Self {
        Self { problems }
    }

    /// Validate and persist a submitted problem.
    ///
    /// Nothing is written when a field is missing.
    ///
    /// # Errors
    ///
    /// Returns `ProblemServiceError::Draft` for missing fields.
    /// Returns `ProblemServiceError::Storage` if persistence fails.
    pub async fn create_problem(&self, draft: ProblemDraft) -> Result<ProblemId, ProblemServiceError> {
        let new = draft.validate()?;
        let id = self.problems.insert_problem(new).await?;
        tracing::info!(%id, "problem created");
        Ok(id)
    }

    /// List problems matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ProblemServiceError::Storage` if repository access fails.
    pub async fn list_problems(
        &self,
        filter: &ProblemFilter,
    ) -> Result<Vec<Problem>, ProblemServiceError> {
        Ok(self.problems.list_problems(filter).await?)
    }

    /// Delete a problem; unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProblemServiceError::Storage` if repository access fails.
    pub async fn delete_problem(&self, id: ProblemId) -> Result<(), ProblemServiceError> {
        self.problems.delete_problem(id).await?;
        tracing::info!(%id, "problem deleted");
        Ok(())
    }
}

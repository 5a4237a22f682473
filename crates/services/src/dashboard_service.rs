use std::sync::Arc;

use prep_core::model::{COMPLETED, SOLVED};
use prep_core::progress::progress_percent;
use serde::Serialize;
use storage::repository::{MockTestRepository, ProblemRepository, SubjectRepository};

use crate::error::DashboardError;

/// Totals and completion percentages shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub dsa: u64,
    pub subjects: u64,
    pub mocks: u64,
    pub dsa_progress: u8,
    pub subject_progress: u8,
}

/// Computes dashboard aggregates from the three repositories.
#[derive(Clone)]
pub struct DashboardService {
    problems: Arc<dyn ProblemRepository>,
    subjects: Arc<dyn SubjectRepository>,
    mock_tests: Arc<dyn MockTestRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        problems: Arc<dyn ProblemRepository>,
        subjects: Arc<dyn SubjectRepository>,
        mock_tests: Arc<dyn MockTestRepository>,
    ) -> Self {
        Self {
            problems,
            subjects,
            mock_tests,
        }
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Storage` if any count cannot be read.
    pub async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        let dsa = self.problems.count_problems().await?;
        let solved = self.problems.count_problems_with_status(SOLVED).await?;
        let subjects = self.subjects.count_subjects().await?;
        let completed = self.subjects.count_subjects_with_status(COMPLETED).await?;
        let mocks = self.mock_tests.count_mock_tests().await?;

        Ok(DashboardSummary {
            dsa,
            subjects,
            mocks,
            dsa_progress: progress_percent(solved, dsa),
            subject_progress: progress_percent(completed, subjects),
        })
    }
}

use serde::Serialize;
use services::DashboardSummary;

/// Dashboard totals and integer completion percentages (0–100).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardVm {
    pub dsa: u64,
    pub subjects: u64,
    pub mocks: u64,
    pub dsa_progress: u8,
    pub subject_progress: u8,
}

impl From<DashboardSummary> for DashboardVm {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            dsa: summary.dsa,
            subjects: summary.subjects,
            mocks: summary.mocks,
            dsa_progress: summary.dsa_progress,
            subject_progress: summary.subject_progress,
        }
    }
}

use prep_core::model::{MockTest, MockTestId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MockTestRowVm {
    pub id: MockTestId,
    pub test_name: String,
    pub score: i64,
    pub date: String,
    pub delete_url: String,
}

impl From<MockTest> for MockTestRowVm {
    fn from(m: MockTest) -> Self {
        Self {
            delete_url: format!("/delete/mocktests/{}", m.id),
            id: m.id,
            test_name: m.test_name,
            score: m.score,
            date: m.date,
        }
    }
}

/// Mock test listing with the rounded average.
///
/// `avg_score` serializes as `null` when no attempts are recorded, which the
/// view distinguishes from a real average of zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MockTestListVm {
    pub data: Vec<MockTestRowVm>,
    pub avg_score: Option<f64>,
}

impl MockTestListVm {
    #[must_use]
    pub fn new(tests: Vec<MockTest>, avg_score: Option<f64>) -> Self {
        Self {
            data: tests.into_iter().map(MockTestRowVm::from).collect(),
            avg_score,
        }
    }
}

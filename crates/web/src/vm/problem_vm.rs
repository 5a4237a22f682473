use prep_core::model::{Problem, ProblemId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemRowVm {
    pub id: ProblemId,
    pub problem: String,
    pub platform: String,
    pub difficulty: String,
    pub status: String,
    pub solved: bool,
    pub delete_url: String,
}

impl From<Problem> for ProblemRowVm {
    fn from(p: Problem) -> Self {
        Self {
            solved: p.is_solved(),
            delete_url: format!("/delete/dsa/{}", p.id),
            id: p.id,
            problem: p.problem,
            platform: p.platform,
            difficulty: p.difficulty,
            status: p.status,
        }
    }
}

/// Problem listing, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProblemListVm {
    pub data: Vec<ProblemRowVm>,
}

impl ProblemListVm {
    #[must_use]
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            data: problems.into_iter().map(ProblemRowVm::from).collect(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::model::draft::{DraftError, required};
use crate::model::ids::ProblemId;

/// Status value that marks a problem as solved. Anything else counts as unsolved.
pub const SOLVED: &str = "Solved";

/// A tracked data-structures/algorithms practice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub problem: String,
    pub platform: String,
    pub difficulty: String,
    pub status: String,
}

impl Problem {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == SOLVED
    }
}

/// Insert payload for a problem. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProblem {
    pub problem: String,
    pub platform: String,
    pub difficulty: String,
    pub status: String,
}

impl NewProblem {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ProblemId) -> Problem {
        Problem {
            id,
            problem: self.problem,
            platform: self.platform,
            difficulty: self.difficulty,
            status: self.status,
        }
    }
}

/// Raw problem submission. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProblemDraft {
    pub problem: Option<String>,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
}

impl ProblemDraft {
    /// Validate the submission into an insert payload.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::MissingField` for the first absent field.
    pub fn validate(self) -> Result<NewProblem, DraftError> {
        Ok(NewProblem {
            problem: required("problem", self.problem)?,
            platform: required("platform", self.platform)?,
            difficulty: required("difficulty", self.difficulty)?,
            status: required("status", self.status)?,
        })
    }
}

/// Listing filter for problems.
///
/// Supplied keys combine with logical AND. Absent or empty values impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    difficulty: Option<String>,
    status: Option<String>,
}

impl ProblemFilter {
    #[must_use]
    pub fn new(difficulty: Option<String>, status: Option<String>) -> Self {
        Self {
            difficulty: difficulty.filter(|d| !d.is_empty()),
            status: status.filter(|s| !s.is_empty()),
        }
    }

    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.status.is_none()
    }

    #[must_use]
    pub fn matches(&self, problem: &Problem) -> bool {
        self.difficulty
            .as_deref()
            .is_none_or(|d| problem.difficulty == d)
            && self.status.as_deref().is_none_or(|s| problem.status == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProblemDraft {
        ProblemDraft {
            problem: Some("Two Sum".into()),
            platform: Some("LeetCode".into()),
            difficulty: Some("Easy".into()),
            status: Some("Solved".into()),
        }
    }

    fn problem(id: u64, difficulty: &str, status: &str) -> Problem {
        Problem {
            id: ProblemId::new(id),
            problem: format!("P{id}"),
            platform: "LeetCode".into(),
            difficulty: difficulty.into(),
            status: status.into(),
        }
    }

    #[test]
    fn validate_keeps_fields_verbatim() {
        let new = draft().validate().unwrap();
        assert_eq!(new.problem, "Two Sum");
        assert_eq!(new.platform, "LeetCode");
        assert_eq!(new.difficulty, "Easy");
        assert_eq!(new.status, "Solved");
    }

    #[test]
    fn validate_rejects_missing_platform() {
        let mut d = draft();
        d.platform = None;
        assert_eq!(
            d.validate(),
            Err(DraftError::MissingField { field: "platform" })
        );
    }

    #[test]
    fn only_exact_solved_counts() {
        assert!(problem(1, "Easy", "Solved").is_solved());
        assert!(!problem(2, "Easy", "solved").is_solved());
        assert!(!problem(3, "Easy", "").is_solved());
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let filter = ProblemFilter::new(Some(String::new()), Some(String::new()));
        assert!(filter.is_empty());
        assert!(filter.matches(&problem(1, "Hard", "Unsolved")));
    }

    #[test]
    fn filter_requires_every_supplied_key() {
        let filter = ProblemFilter::new(Some("Easy".into()), Some("Solved".into()));
        assert!(filter.matches(&problem(1, "Easy", "Solved")));
        assert!(!filter.matches(&problem(2, "Easy", "Unsolved")));
        assert!(!filter.matches(&problem(3, "Hard", "Solved")));
    }
}

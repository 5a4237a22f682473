use async_trait::async_trait;
use prep_core::model::{
    MockTest, MockTestId, NewMockTest, NewProblem, NewSubject, Problem, ProblemFilter, ProblemId,
    Subject, SubjectId,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for DSA problems.
#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Insert a new problem and return its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn insert_problem(&self, problem: NewProblem) -> Result<ProblemId, StorageError>;

    /// List problems matching every key of `filter`, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_problems(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StorageError>;

    /// Delete a problem. Deleting an unknown id succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn delete_problem(&self, id: ProblemId) -> Result<(), StorageError>;

    async fn count_problems(&self) -> Result<u64, StorageError>;

    async fn count_problems_with_status(&self, status: &str) -> Result<u64, StorageError>;
}

/// Repository contract for study subjects.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn insert_subject(&self, subject: NewSubject) -> Result<SubjectId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError>;

    /// Deleting an unknown id succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn delete_subject(&self, id: SubjectId) -> Result<(), StorageError>;

    async fn count_subjects(&self) -> Result<u64, StorageError>;

    async fn count_subjects_with_status(&self, status: &str) -> Result<u64, StorageError>;
}

/// Repository contract for mock test attempts.
#[async_trait]
pub trait MockTestRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn insert_mock_test(&self, test: NewMockTest) -> Result<MockTestId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_mock_tests(&self) -> Result<Vec<MockTest>, StorageError>;

    /// Deleting an unknown id succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn delete_mock_test(&self, id: MockTestId) -> Result<(), StorageError>;

    async fn count_mock_tests(&self) -> Result<u64, StorageError>;

    /// Mean score across all attempts, `None` when there are none.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn average_score(&self) -> Result<Option<f64>, StorageError>;
}

/// One in-memory table. Ids come from a counter that only moves forward, so
/// a deleted id is never handed out again.
struct MemTable<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T: Clone> MemTable<T> {
    fn insert(&mut self, build: impl FnOnce(u64) -> T) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.rows.insert(id, build(id));
        id
    }

    fn remove(&mut self, id: u64) {
        self.rows.remove(&id);
    }

    fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    fn len(&self) -> u64 {
        self.rows.len() as u64
    }
}

impl<T> Default for MemTable<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

#[derive(Default)]
struct MemTables {
    problems: MemTable<Problem>,
    subjects: MemTable<Subject>,
    mock_tests: MemTable<MockTest>,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<MemTables>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<R>(&self, f: impl FnOnce(&mut MemTables) -> R) -> Result<R, StorageError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl ProblemRepository for InMemoryRepository {
    async fn insert_problem(&self, problem: NewProblem) -> Result<ProblemId, StorageError> {
        self.with_tables(|t| {
            let id = t
                .problems
                .insert(|id| problem.with_id(ProblemId::new(id)));
            ProblemId::new(id)
        })
    }

    async fn list_problems(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StorageError> {
        self.with_tables(|t| {
            t.problems
                .rows()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        })
    }

    async fn delete_problem(&self, id: ProblemId) -> Result<(), StorageError> {
        self.with_tables(|t| t.problems.remove(id.value()))
    }

    async fn count_problems(&self) -> Result<u64, StorageError> {
        self.with_tables(|t| t.problems.len())
    }

    async fn count_problems_with_status(&self, status: &str) -> Result<u64, StorageError> {
        self.with_tables(|t| t.problems.rows().filter(|p| p.status == status).count() as u64)
    }
}

#[async_trait]
impl SubjectRepository for InMemoryRepository {
    async fn insert_subject(&self, subject: NewSubject) -> Result<SubjectId, StorageError> {
        self.with_tables(|t| {
            let id = t
                .subjects
                .insert(|id| subject.with_id(SubjectId::new(id)));
            SubjectId::new(id)
        })
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        self.with_tables(|t| t.subjects.rows().cloned().collect())
    }

    async fn delete_subject(&self, id: SubjectId) -> Result<(), StorageError> {
        self.with_tables(|t| t.subjects.remove(id.value()))
    }

    async fn count_subjects(&self) -> Result<u64, StorageError> {
        self.with_tables(|t| t.subjects.len())
    }

    async fn count_subjects_with_status(&self, status: &str) -> Result<u64, StorageError> {
        self.with_tables(|t| t.subjects.rows().filter(|s| s.status == status).count() as u64)
    }
}

#[async_trait]
impl MockTestRepository for InMemoryRepository {
    async fn insert_mock_test(&self, test: NewMockTest) -> Result<MockTestId, StorageError> {
        self.with_tables(|t| {
            let id = t
                .mock_tests
                .insert(|id| test.with_id(MockTestId::new(id)));
            MockTestId::new(id)
        })
    }

    async fn list_mock_tests(&self) -> Result<Vec<MockTest>, StorageError> {
        self.with_tables(|t| t.mock_tests.rows().cloned().collect())
    }

    async fn delete_mock_test(&self, id: MockTestId) -> Result<(), StorageError> {
        self.with_tables(|t| t.mock_tests.remove(id.value()))
    }

    async fn count_mock_tests(&self) -> Result<u64, StorageError> {
        self.with_tables(|t| t.mock_tests.len())
    }

    async fn average_score(&self) -> Result<Option<f64>, StorageError> {
        self.with_tables(|t| prep_core::progress::mean_score(t.mock_tests.rows().map(|m| m.score)))
    }
}

/// Aggregates the three repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub problems: Arc<dyn ProblemRepository>,
    pub subjects: Arc<dyn SubjectRepository>,
    pub mock_tests: Arc<dyn MockTestRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let problems: Arc<dyn ProblemRepository> = Arc::new(repo.clone());
        let subjects: Arc<dyn SubjectRepository> = Arc::new(repo.clone());
        let mock_tests: Arc<dyn MockTestRepository> = Arc::new(repo);
        Self {
            problems,
            subjects,
            mock_tests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_problem(name: &str, difficulty: &str, status: &str) -> NewProblem {
        NewProblem {
            problem: name.into(),
            platform: "LeetCode".into(),
            difficulty: difficulty.into(),
            status: status.into(),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let first = repo
            .insert_problem(new_problem("A", "Easy", "Solved"))
            .await
            .unwrap();
        repo.delete_problem(first).await.unwrap();
        let second = repo
            .insert_problem(new_problem("B", "Easy", "Solved"))
            .await
            .unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let repo = InMemoryRepository::new();
        for (name, difficulty, status) in [
            ("a", "Easy", "Solved"),
            ("b", "Easy", "Unsolved"),
            ("c", "Hard", "Solved"),
            ("d", "Hard", "Unsolved"),
        ] {
            repo.insert_problem(new_problem(name, difficulty, status))
                .await
                .unwrap();
        }

        let filter = ProblemFilter::new(Some("Easy".into()), Some("Solved".into()));
        let found = repo.list_problems(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].problem, "a");

        let all = repo.list_problems(&ProblemFilter::all()).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.problem.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn average_of_empty_table_is_no_data() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.average_score().await.unwrap(), None);

        repo.insert_mock_test(NewMockTest {
            test_name: "zero".into(),
            score: 0,
            date: "2024-01-01".into(),
        })
        .await
        .unwrap();
        assert_eq!(repo.average_score().await.unwrap(), Some(0.0));
    }
}

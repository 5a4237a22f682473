use async_trait::async_trait;
use prep_core::model::{NewProblem, Problem, ProblemFilter, ProblemId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::crud::{self, Table, Value};
use super::mapping::{problem_id_from_i64, ser, text};
use crate::repository::{ProblemRepository, StorageError};

pub(crate) struct ProblemTable;

impl Table for ProblemTable {
    const NAME: &'static str = "dsa";
    const COLUMNS: &'static [&'static str] = &["problem", "platform", "difficulty", "status"];

    type New = NewProblem;
    type Record = Problem;

    fn values(new: NewProblem) -> Vec<Value> {
        vec![
            Value::Text(new.problem),
            Value::Text(new.platform),
            Value::Text(new.difficulty),
            Value::Text(new.status),
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<Problem, StorageError> {
        Ok(Problem {
            id: problem_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
            problem: text(row, "problem")?,
            platform: text(row, "platform")?,
            difficulty: text(row, "difficulty")?,
            status: text(row, "status")?,
        })
    }
}

#[async_trait]
impl ProblemRepository for SqliteRepository {
    async fn insert_problem(&self, problem: NewProblem) -> Result<ProblemId, StorageError> {
        let id = crud::insert::<ProblemTable>(&self.pool, problem).await?;
        problem_id_from_i64(id)
    }

    async fn list_problems(&self, filter: &ProblemFilter) -> Result<Vec<Problem>, StorageError> {
        let mut filters = Vec::with_capacity(2);
        if let Some(difficulty) = filter.difficulty() {
            filters.push(("difficulty", difficulty));
        }
        if let Some(status) = filter.status() {
            filters.push(("status", status));
        }
        crud::select::<ProblemTable>(&self.pool, &filters).await
    }

    async fn delete_problem(&self, id: ProblemId) -> Result<(), StorageError> {
        crud::delete::<ProblemTable>(&self.pool, id.value()).await
    }

    async fn count_problems(&self) -> Result<u64, StorageError> {
        crud::count::<ProblemTable>(&self.pool, &[]).await
    }

    async fn count_problems_with_status(&self, status: &str) -> Result<u64, StorageError> {
        crud::count::<ProblemTable>(&self.pool, &[("status", status)]).await
    }
}

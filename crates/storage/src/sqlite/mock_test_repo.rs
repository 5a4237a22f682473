use async_trait::async_trait;
use prep_core::model::{MockTest, MockTestId, NewMockTest};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::crud::{self, Table, Value};
use super::mapping::{conn, mock_test_id_from_i64, ser, text};
use crate::repository::{MockTestRepository, StorageError};

pub(crate) struct MockTestTable;

impl Table for MockTestTable {
    const NAME: &'static str = "mocktests";
    const COLUMNS: &'static [&'static str] = &["test_name", "score", "date"];
    // Older databases may hold free-text scores; coerce the way AVG does.
    const SELECT: &'static [&'static str] =
        &["test_name", "CAST(score AS INTEGER) AS score", "date"];

    type New = NewMockTest;
    type Record = MockTest;

    fn values(new: NewMockTest) -> Vec<Value> {
        vec![
            Value::Text(new.test_name),
            Value::Int(new.score),
            Value::Text(new.date),
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<MockTest, StorageError> {
        Ok(MockTest {
            id: mock_test_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
            test_name: text(row, "test_name")?,
            score: row.try_get::<i64, _>("score").map_err(ser)?,
            date: text(row, "date")?,
        })
    }
}

#[async_trait]
impl MockTestRepository for SqliteRepository {
    async fn insert_mock_test(&self, test: NewMockTest) -> Result<MockTestId, StorageError> {
        let id = crud::insert::<MockTestTable>(&self.pool, test).await?;
        mock_test_id_from_i64(id)
    }

    async fn list_mock_tests(&self) -> Result<Vec<MockTest>, StorageError> {
        crud::select::<MockTestTable>(&self.pool, &[]).await
    }

    async fn delete_mock_test(&self, id: MockTestId) -> Result<(), StorageError> {
        crud::delete::<MockTestTable>(&self.pool, id.value()).await
    }

    async fn count_mock_tests(&self) -> Result<u64, StorageError> {
        crud::count::<MockTestTable>(&self.pool, &[]).await
    }

    async fn average_score(&self) -> Result<Option<f64>, StorageError> {
        // AVG over zero rows is NULL, which maps onto the no-data sentinel.
        let row = sqlx::query(
            r"
            SELECT AVG(score) AS avg_score
            FROM mocktests
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(conn)?;

        row.try_get::<Option<f64>, _>("avg_score").map_err(ser)
    }
}

use prep_core::model::{MockTestId, ProblemId, SubjectId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn problem_id_from_i64(v: i64) -> Result<ProblemId, StorageError> {
    Ok(ProblemId::new(i64_to_u64("problem_id", v)?))
}

pub(crate) fn subject_id_from_i64(v: i64) -> Result<SubjectId, StorageError> {
    Ok(SubjectId::new(i64_to_u64("subject_id", v)?))
}

pub(crate) fn mock_test_id_from_i64(v: i64) -> Result<MockTestId, StorageError> {
    Ok(MockTestId::new(i64_to_u64("mock_test_id", v)?))
}

pub(crate) fn text(row: &SqliteRow, column: &str) -> Result<String, StorageError> {
    row.try_get::<String, _>(column).map_err(ser)
}

pub(crate) fn count_from_i64(v: i64) -> Result<u64, StorageError> {
    i64_to_u64("count", v)
}

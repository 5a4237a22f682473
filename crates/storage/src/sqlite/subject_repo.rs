use async_trait::async_trait;
use prep_core::model::{NewSubject, Subject, SubjectId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::crud::{self, Table, Value};
use super::mapping::{ser, subject_id_from_i64, text};
use crate::repository::{StorageError, SubjectRepository};

pub(crate) struct SubjectTable;

impl Table for SubjectTable {
    const NAME: &'static str = "subjects";
    const COLUMNS: &'static [&'static str] = &["subject", "topic", "status"];

    type New = NewSubject;
    type Record = Subject;

    fn values(new: NewSubject) -> Vec<Value> {
        vec![
            Value::Text(new.subject),
            Value::Text(new.topic),
            Value::Text(new.status),
        ]
    }

    fn from_row(row: &SqliteRow) -> Result<Subject, StorageError> {
        Ok(Subject {
            id: subject_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
            subject: text(row, "subject")?,
            topic: text(row, "topic")?,
            status: text(row, "status")?,
        })
    }
}

#[async_trait]
impl SubjectRepository for SqliteRepository {
    async fn insert_subject(&self, subject: NewSubject) -> Result<SubjectId, StorageError> {
        let id = crud::insert::<SubjectTable>(&self.pool, subject).await?;
        subject_id_from_i64(id)
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>, StorageError> {
        crud::select::<SubjectTable>(&self.pool, &[]).await
    }

    async fn delete_subject(&self, id: SubjectId) -> Result<(), StorageError> {
        crud::delete::<SubjectTable>(&self.pool, id.value()).await
    }

    async fn count_subjects(&self) -> Result<u64, StorageError> {
        crud::count::<SubjectTable>(&self.pool, &[]).await
    }

    async fn count_subjects_with_status(&self, status: &str) -> Result<u64, StorageError> {
        crud::count::<SubjectTable>(&self.pool, &[("status", status)]).await
    }
}

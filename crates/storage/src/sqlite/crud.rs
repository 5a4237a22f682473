//! Generic single-table CRUD shared by the tracker repositories.
//!
//! Table and column names come only from `Table` constants; every caller
//! supplied value goes through a bind parameter.

use std::fmt::Write as _;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::mapping::{conn, count_from_i64, ser};
use crate::repository::StorageError;

/// A bindable column value.
pub(crate) enum Value {
    Text(String),
    Int(i64),
}

/// Schema description of one tracker table with an `id INTEGER PRIMARY KEY`.
pub(crate) trait Table {
    const NAME: &'static str;
    /// Non-id columns, in insert order.
    const COLUMNS: &'static [&'static str];
    /// Select expressions in `COLUMNS` order, each yielding the column name.
    const SELECT: &'static [&'static str] = Self::COLUMNS;

    type New: Send;
    type Record: Send;

    /// Column values in `COLUMNS` order.
    fn values(new: Self::New) -> Vec<Value>;

    fn from_row(row: &SqliteRow) -> Result<Self::Record, StorageError>;
}

/// Equality predicates joined with `AND`.
pub(crate) type Filters<'a> = [(&'static str, &'a str)];

fn where_clause(sql: &mut String, filters: &Filters<'_>) {
    for (i, (column, _)) in filters.iter().enumerate() {
        let joiner = if i == 0 { " WHERE" } else { " AND" };
        let _ = write!(sql, "{joiner} {column} = ?{}", i + 1);
    }
}

pub(crate) async fn insert<T: Table>(pool: &SqlitePool, new: T::New) -> Result<i64, StorageError> {
    let placeholders = (1..=T::COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        T::NAME,
        T::COLUMNS.join(", "),
    );

    let mut query = sqlx::query(&sql);
    for value in T::values(new) {
        query = match value {
            Value::Text(s) => query.bind(s),
            Value::Int(i) => query.bind(i),
        };
    }

    let res = query.execute(pool).await.map_err(conn)?;
    tracing::debug!(table = T::NAME, id = res.last_insert_rowid(), "inserted row");
    Ok(res.last_insert_rowid())
}

pub(crate) async fn select<T: Table>(
    pool: &SqlitePool,
    filters: &Filters<'_>,
) -> Result<Vec<T::Record>, StorageError> {
    let mut sql = format!("SELECT id, {} FROM {}", T::SELECT.join(", "), T::NAME);
    where_clause(&mut sql, filters);
    sql.push_str(" ORDER BY id ASC");

    let mut query = sqlx::query(&sql);
    for (_, value) in filters {
        query = query.bind(*value);
    }

    let rows = query.fetch_all(pool).await.map_err(conn)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(T::from_row(&row)?);
    }
    Ok(records)
}

/// Delete by id. A missing row is not an error.
pub(crate) async fn delete<T: Table>(pool: &SqlitePool, id: u64) -> Result<(), StorageError> {
    // Ids beyond i64::MAX were never assigned, so there is nothing to remove.
    let Ok(id) = i64::try_from(id) else {
        return Ok(());
    };

    let sql = format!("DELETE FROM {} WHERE id = ?1", T::NAME);
    let res = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(conn)?;
    tracing::debug!(table = T::NAME, id, removed = res.rows_affected(), "delete");
    Ok(())
}

pub(crate) async fn count<T: Table>(
    pool: &SqlitePool,
    filters: &Filters<'_>,
) -> Result<u64, StorageError> {
    let mut sql = format!("SELECT COUNT(*) AS count FROM {}", T::NAME);
    where_clause(&mut sql, filters);

    let mut query = sqlx::query(&sql);
    for (_, value) in filters {
        query = query.bind(*value);
    }

    let row = query.fetch_one(pool).await.map_err(conn)?;
    let count: i64 = row.try_get("count").map_err(ser)?;
    count_from_i64(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_clause_numbers_placeholders() {
        let mut sql = String::from("SELECT * FROM dsa");
        where_clause(&mut sql, &[("difficulty", "Easy"), ("status", "Solved")]);
        assert_eq!(
            sql,
            "SELECT * FROM dsa WHERE difficulty = ?1 AND status = ?2"
        );
    }

    #[test]
    fn empty_filters_add_nothing() {
        let mut sql = String::from("SELECT * FROM dsa");
        where_clause(&mut sql, &[]);
        assert_eq!(sql, "SELECT * FROM dsa");
    }
}

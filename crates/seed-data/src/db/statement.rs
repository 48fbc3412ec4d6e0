//! Parameterized statements and the capability a seeding backend provides.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, postgres::PgArguments, query::Query};
use time::Date;
use uuid::Uuid;

use super::SeedError;

/// A single bind parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uuid(Uuid),
    Text(String),
    Int(i32),
    Date(Date),
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Value::Date(v)
    }
}

/// SQL text with positional (`$1`, `$2`, ...) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// What the seeder needs from a store: run one statement, or run several
/// atomically. Both return the number of rows affected.
#[async_trait]
pub trait Database: Send + Sync {
    async fn execute(&self, statement: Statement) -> Result<u64, SeedError>;

    async fn transaction(&self, statements: Vec<Statement>) -> Result<u64, SeedError>;
}

fn bind_all(statement: &Statement) -> Query<'_, Postgres, PgArguments> {
    statement
        .params
        .iter()
        .fold(sqlx::query::<Postgres>(statement.sql), |query, param| match param {
            Value::Uuid(v) => query.bind(*v),
            Value::Text(v) => query.bind(v.as_str()),
            Value::Int(v) => query.bind(*v),
            Value::Date(v) => query.bind(*v),
        })
}

#[async_trait]
impl Database for PgPool {
    async fn execute(&self, statement: Statement) -> Result<u64, SeedError> {
        let result = bind_all(&statement).execute(self).await?;
        Ok(result.rows_affected())
    }

    async fn transaction(&self, statements: Vec<Statement>) -> Result<u64, SeedError> {
        let mut tx = self.begin().await?;
        let mut affected = 0;

        for statement in &statements {
            affected += bind_all(statement).execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_statement_bind_order() {
        let id = Uuid::new_v4();
        let statement = Statement::new("INSERT INTO t VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind("name")
            .bind(42)
            .bind(date!(2023 - 06 - 27));

        assert_eq!(
            statement.params,
            vec![
                Value::Uuid(id),
                Value::Text("name".to_string()),
                Value::Int(42),
                Value::Date(date!(2023 - 06 - 27)),
            ]
        );
    }
}

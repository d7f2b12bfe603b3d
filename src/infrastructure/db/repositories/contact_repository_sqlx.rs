use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::contact_repository::{ContactRepository, StoreError};
use crate::domain::contacts::contact_message::{
    ContactMessage, NewContactMessage, required_message,
};
use crate::infrastructure::db::PgPool;

pub struct SqlxContactRepository {
    pub pool: PgPool,
}

impl SqlxContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> ContactMessage {
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        message: row.get("message"),
        read: row.get("read"),
        created_at: row.get("created_at"),
    }
}

// contact_messages_<field>_check -> "<field> is required"
fn constraint_field(constraint: &str) -> Option<&str> {
    constraint
        .strip_prefix("contact_messages_")
        .and_then(|rest| rest.strip_suffix("_check"))
}

pub(crate) fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_check_violation() {
            let messages = match db.constraint().and_then(constraint_field) {
                Some(field) => vec![required_message(field)],
                None => vec![db.message().to_string()],
            };
            return StoreError::Rejected(messages);
        }
    }
    if matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
    ) {
        StoreError::Unavailable(err.into())
    } else {
        StoreError::Other(err.into())
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepository {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let row = sqlx::query(
            r#"INSERT INTO contact_messages (id, name, email, message)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, message, read, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(message.name())
        .bind(message.email())
        .bind(message.message())
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        Ok(map_row(row))
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, message, read, created_at
               FROM contact_messages
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;
        Ok(rows.into_iter().map(map_row).collect())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::contact::{Contact, ContactInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: &ContactInsert) -> Result<Contact, AppError>;

    /// Admin-level listing; not exposed over HTTP
    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact(&self, contact: &ContactInsert) -> Result<Contact, AppError> {
        let created = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO portfolio_contact (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"SELECT id, name, email, message, created_at FROM portfolio_contact ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }
}

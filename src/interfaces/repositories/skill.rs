use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::skill::{Skill, SkillInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, name, category, proficiency FROM portfolio_skill ORDER BY id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO portfolio_skill (name, category, proficiency)
            VALUES ($1, $2, $3)
            RETURNING id, name, category, proficiency
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}

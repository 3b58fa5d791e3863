use crate::repositories::sqlx_repo::{SqlxContactRepo, SqlxHealthRepo, SqlxProjectRepo, SqlxSkillRepo};

#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: SqlxProjectRepo,
    pub skill_repo: SqlxSkillRepo,
    pub contact_repo: SqlxContactRepo,
    pub health_repo: SqlxHealthRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            project_repo: SqlxProjectRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            contact_repo: SqlxContactRepo::new(pool.clone()),
            health_repo: SqlxHealthRepo::new(pool),
        }
    }
}

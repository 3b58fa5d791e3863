use std::sync::Arc;

use crate::{
    entities::skill::{NewSkillRequest, Skill, SkillInsert},
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub skill_repo: Arc<R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        let insert = SkillInsert::try_from(request)?;

        self.skill_repo.create_skill(&insert).await
    }
}

use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, telemetry};

use repositories::{
    contact::ContactRepository, health::HealthRepository, project::ProjectRepository,
    skill::SkillRepository,
};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactHandler, project::ProjectHandler, skill::SkillHandler};

pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository>;
pub type AppSkillHandler = SkillHandler<dyn SkillRepository>;
pub type AppContactHandler = ContactHandler<dyn ContactRepository>;

/// Process-wide application context handed to every HTTP worker.
pub struct AppState {
    pub name: String,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub contact_handler: AppContactHandler,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let repos = SharedRepositories::new(pool);

        AppState::from_repositories(
            &config.name,
            Arc::new(repos.project_repo),
            Arc::new(repos.skill_repo),
            Arc::new(repos.contact_repo),
            Arc::new(repos.health_repo),
        )
    }

    pub fn from_repositories(
        name: &str,
        project_repo: Arc<dyn ProjectRepository>,
        skill_repo: Arc<dyn SkillRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        health_repo: Arc<dyn HealthRepository>,
    ) -> Self {
        AppState {
            name: name.to_string(),
            project_handler: ProjectHandler::new(project_repo),
            skill_handler: SkillHandler::new(skill_repo),
            contact_handler: ContactHandler::new(contact_repo),
            health_repo,
        }
    }
}

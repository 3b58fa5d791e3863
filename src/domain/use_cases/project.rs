use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::{
        project::{NewProjectRequest, ProjectInsert, ProjectResponse},
        project_image::{ProjectImage, ProjectImageInsert},
    },
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists all projects with their images embedded
    pub async fn list_projects(&self) -> Result<Vec<ProjectResponse>, AppError> {
        let projects = self.project_repo
            .list_projects_with_images()
            .await?
            .into_iter()
            .map(ProjectResponse::from)
            .collect();

        Ok(projects)
    }

    /// Validates and stores a new project
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<ProjectResponse, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let project = self.project_repo.create_project(&insert).await?;
        tracing::info!(project_id = project.id, "Project created");

        Ok(ProjectResponse::from(project))
    }

    /// Attaches an image reference to a project. Used by seeding and admin tooling.
    pub async fn attach_image(&self, image: ProjectImageInsert) -> Result<ProjectImage, AppError> {
        image.validate()?;

        self.project_repo.create_project_image(&image).await
    }
}

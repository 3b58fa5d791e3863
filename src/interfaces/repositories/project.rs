use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::{
        project::{Project, ProjectInsert, ProjectWithImages},
        project_image::{ProjectImage, ProjectImageInsert},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists every project with its image references resolved, in insertion order
    async fn list_projects_with_images(&self) -> Result<Vec<ProjectWithImages>, AppError>;

    /// Inserts a project and returns it with the store-assigned id and defaults
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;

    /// Attaches an image to an existing project
    async fn create_project_image(&self, image: &ProjectImageInsert) -> Result<ProjectImage, AppError>;

    async fn list_project_images(&self, project_id: i64) -> Result<Vec<ProjectImage>, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects_with_images(&self) -> Result<Vec<ProjectWithImages>, AppError> {
        let projects = sqlx::query_as::<_, ProjectWithImages>(
            r#"
            SELECT
                p.id, p.title, p.description, p.link, p.technologies, p.status, p.created_at,
                COALESCE(
                    ARRAY_AGG(i.image::TEXT ORDER BY i.id) FILTER (WHERE i.id IS NOT NULL),
                    '{}'::TEXT[]
                ) AS images
            FROM portfolio_project p
            LEFT JOIN portfolio_projectimage i ON i.project_id = p.id
            GROUP BY p.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO portfolio_project (title, description, link, technologies, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, link, technologies, status, created_at
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.link)
        .bind(&project.technologies)
        .bind(&project.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_project_image(&self, image: &ProjectImageInsert) -> Result<ProjectImage, AppError> {
        let created = sqlx::query_as::<_, ProjectImage>(
            r#"
            INSERT INTO portfolio_projectimage (project_id, image)
            VALUES ($1, $2)
            RETURNING id, project_id, image
            "#,
        )
        .bind(image.project_id)
        .bind(&image.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::ReferentialIntegrity(_) => AppError::ReferentialIntegrity(format!(
                "Project {} does not exist",
                image.project_id
            )),
            other => other,
        })?;

        Ok(created)
    }

    async fn list_project_images(&self, project_id: i64) -> Result<Vec<ProjectImage>, AppError> {
        let images = sqlx::query_as::<_, ProjectImage>(
            r#"
            SELECT id, project_id, image FROM portfolio_projectimage
            WHERE project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::validation::{
    new_validation_error, non_blank, required_field, validate_no_nul, validate_not_blank,
    validate_optional_url, MAX_URL_LENGTH,
};

// ───── Constants ──────────────────────────────────────────────────────
pub const DEFAULT_PROJECT_STATUS: &str = "completed";
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_STATUS_LENGTH: u64 = 50;
const MAX_TECHNOLOGIES: usize = 50;
const MAX_TECHNOLOGY_LENGTH: usize = 100;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub technologies: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A project row joined with the image references of its `ProjectImage` rows.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProjectWithImages {
    #[sqlx(flatten)]
    pub project: Project,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub technologies: Vec<String>,
    pub status: String,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub link: Option<String>,
    pub technologies: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewProjectRequest {
    #[validate(
        required(message = "Title is required"),
        length(max = MAX_TITLE_LENGTH, message = "Title must be at most 200 characters"),
        custom(function = "validate_not_blank", message = "Title cannot be blank")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Description is required"),
        custom(function = "validate_not_blank", message = "Description cannot be blank")
    )]
    pub description: Option<String>,

    #[validate(
        length(max = MAX_URL_LENGTH, message = "Link must be at most 500 characters"),
        custom(function = "validate_optional_url")
    )]
    pub link: Option<String>,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Option<Vec<String>>,

    #[validate(
        length(max = MAX_STATUS_LENGTH, message = "Status must be at most 50 characters"),
        custom(function = "validate_no_nul")
    )]
    pub status: Option<String>,
}

fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES {
        return Err(new_validation_error("too_many_technologies", "Too many technologies provided"));
    }
    if technologies
        .iter()
        .any(|t| {
            t.trim().is_empty() || t.chars().count() > MAX_TECHNOLOGY_LENGTH || t.contains('\0')
        })
    {
        return Err(new_validation_error(
            "invalid_technology",
            "Technologies must be non-empty text of at most 100 characters",
        ));
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectInsert {
            title: required_field("title", value.title)?,
            description: required_field("description", value.description)?,
            link: non_blank(value.link),
            technologies: value.technologies.unwrap_or_default(),
            status: non_blank(value.status)
                .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
        })
    }
}

impl ProjectResponse {
    pub fn new(project: Project, images: Vec<String>) -> Self {
        ProjectResponse {
            id: project.id,
            title: project.title,
            description: project.description,
            images,
            link: project.link,
            technologies: project.technologies,
            status: project.status,
            created_at: project.created_at,
        }
    }
}

impl From<ProjectWithImages> for ProjectResponse {
    fn from(row: ProjectWithImages) -> Self {
        ProjectResponse::new(row.project, row.images)
    }
}

/// A freshly created project has no images yet.
impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse::new(project, Vec::new())
    }
}

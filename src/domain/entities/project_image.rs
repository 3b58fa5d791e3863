use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{validate_not_blank, MAX_URL_LENGTH};

/// An image attached to a project: either a URL or a storage path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectImage {
    pub id: i64,
    pub project_id: i64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectImageInsert {
    pub project_id: i64,

    #[validate(
        length(min = 1, max = MAX_URL_LENGTH, message = "Image reference must be 1-500 characters"),
        custom(function = "validate_not_blank", message = "Image reference cannot be blank")
    )]
    pub image: String,
}

impl ProjectImageInsert {
    pub fn new(project_id: i64, image: impl Into<String>) -> Self {
        ProjectImageInsert {
            project_id,
            image: image.into(),
        }
    }
}

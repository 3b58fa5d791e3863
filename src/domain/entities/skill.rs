use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{required_field, validate_not_blank};

pub const DEFAULT_PROFICIENCY: i32 = 50;
const MAX_NAME_LENGTH: u64 = 100;
const MAX_CATEGORY_LENGTH: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Intended range is 0-100; the store does not enforce it.
    pub proficiency: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillInsert {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewSkillRequest {
    #[validate(
        required(message = "Name is required"),
        length(max = MAX_NAME_LENGTH, message = "Name must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Name cannot be blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Category is required"),
        length(max = MAX_CATEGORY_LENGTH, message = "Category must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Category cannot be blank")
    )]
    pub category: Option<String>,

    pub proficiency: Option<i32>,
}

impl TryFrom<NewSkillRequest> for SkillInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewSkillRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(SkillInsert {
            name: required_field("name", value.name)?,
            category: required_field("category", value.category)?,
            proficiency: value.proficiency.unwrap_or(DEFAULT_PROFICIENCY),
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{required_field, validate_not_blank};

pub const CONTACT_RECEIVED_MESSAGE: &str = "Message sent successfully";
const MAX_NAME_LENGTH: u64 = 100;
const MAX_EMAIL_LENGTH: u64 = 120;

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewContactForm {
    #[validate(
        required(message = "Name is required"),
        length(max = MAX_NAME_LENGTH, message = "Name must be at most 100 characters"),
        custom(function = "validate_not_blank", message = "Name cannot be blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        length(max = MAX_EMAIL_LENGTH, message = "Email must be at most 120 characters"),
        email(message = "Invalid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Message is required"),
        custom(function = "validate_not_blank", message = "Message cannot be blank")
    )]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactInsert {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub message: String,
}

impl TryFrom<NewContactForm> for ContactInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewContactForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ContactInsert {
            name: required_field("name", value.name)?.trim().to_string(),
            email: required_field("email", value.email)?.trim().to_string(),
            message: required_field("message", value.message)?,
        })
    }
}

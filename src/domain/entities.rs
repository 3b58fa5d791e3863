pub mod contact;
pub mod project;
pub mod project_image;
pub mod skill;
pub mod validation;

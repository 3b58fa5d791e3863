pub mod contact;
pub mod health;
pub mod project;
pub mod skill;
pub mod sqlx_repo;

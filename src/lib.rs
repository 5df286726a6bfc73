mod admin;
mod config;
mod database;
mod models;
mod web;

pub use admin::routes as admin_routes;
pub use config::Config;
pub use database::{Database, DatabaseError};
pub use models::{
    ContactMessage, CreateExperienceRequest, CreateProjectRequest, CreateSkillRequest, Experience,
    Project, Skill, split_trim,
};
pub use web::{AppState, routes};

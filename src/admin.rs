//! Admin API Handlers
//!
//! A minimal JSON record-management surface for the display entities and the
//! contact inbox:
//! - `POST /admin/skills` / `GET /admin/skills`
//! - `POST /admin/projects` / `GET /admin/projects`
//! - `POST /admin/experiences` / `GET /admin/experiences`
//! - `GET /admin/messages?q=term` - received messages, searchable

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{
    models::{
        ContactMessage, CreateExperienceRequest, CreateProjectRequest, CreateSkillRequest,
        Experience, Project, Skill,
    },
    web::AppState,
};

async fn create_skill(
    State(state): State<AppState>,
    Json(req): Json<CreateSkillRequest>,
) -> impl IntoResponse {
    match state.db.create_skill(&req).await {
        Ok(id) => {
            tracing::info!(skill_id = id, name = req.name.as_str(), "Skill created");
            (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create skill: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create skill: {}", e),
            )
                .into_response()
        }
    }
}

async fn list_skills(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.list_skills().await {
        Ok(rows) => {
            let skills: Vec<Skill> = rows.into_iter().map(Skill::from).collect();
            Json(skills).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list skills: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list skills: {}", e),
            )
                .into_response()
        }
    }
}

async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    match state.db.create_project(&req).await {
        Ok(id) => {
            tracing::info!(project_id = id, name = req.name.as_str(), "Project created");
            (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create project: {}", e),
            )
                .into_response()
        }
    }
}

async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.list_projects().await {
        Ok(rows) => {
            let projects: Vec<Project> = rows.into_iter().map(Project::from).collect();
            Json(projects).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list projects: {}", e),
            )
                .into_response()
        }
    }
}

async fn create_experience(
    State(state): State<AppState>,
    Json(req): Json<CreateExperienceRequest>,
) -> impl IntoResponse {
    match state.db.create_experience(&req).await {
        Ok(id) => {
            tracing::info!(
                experience_id = id,
                role = req.role.as_str(),
                company = req.company.as_str(),
                "Experience created"
            );
            (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create experience: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create experience: {}", e),
            )
                .into_response()
        }
    }
}

async fn list_experiences(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.list_experiences().await {
        Ok(rows) => {
            let experiences: Vec<Experience> = rows.into_iter().map(Experience::from).collect();
            Json(experiences).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list experiences: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list experiences: {}", e),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageQuery {
    q: Option<String>,
}

async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let result = match query.q.as_deref() {
        Some(term) if !term.is_empty() => state.db.search_contact_messages(term).await,
        _ => state.db.list_contact_messages().await,
    };

    match result {
        Ok(rows) => {
            let messages: Vec<ContactMessage> =
                rows.into_iter().map(ContactMessage::from).collect();
            Json(messages).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list contact messages: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list contact messages: {}", e),
            )
                .into_response()
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route("/projects", get(list_projects).post(create_project))
        .route("/experiences", get(list_experiences).post(create_experience))
        .route("/messages", get(list_messages))
}

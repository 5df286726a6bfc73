//! Web Handlers
//!
//! The public-facing pages of the portfolio:
//! - `GET /` - home page (skills, projects, experiences)
//! - `POST /contact-submit/` - persist a contact form submission
//! - `GET /messages/` - received contact messages, newest first

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    database::Database,
    models::{ContactMessage, Experience, Project, Skill},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// Template rendering helper
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}

// Templates
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
}

#[derive(Template)]
#[template(path = "message_list.html")]
struct MessageListTemplate {
    messages: Vec<ContactMessage>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    description: String,
    back_url: String,
}

/// Contact form fields. Every field is optional so a submission with a
/// missing field is stored with an empty value instead of being rejected.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

/// The home page: all skills, projects and experiences in insertion order.
async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let skills = match state.db.list_skills().await {
        Ok(rows) => rows.into_iter().map(Skill::from).collect(),
        Err(e) => {
            tracing::error!("Failed to list skills: {}", e);
            return render_error(format!("Failed to load the portfolio: {}", e));
        }
    };

    let projects = match state.db.list_projects().await {
        Ok(rows) => rows.into_iter().map(Project::from).collect(),
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            return render_error(format!("Failed to load the portfolio: {}", e));
        }
    };

    let experiences = match state.db.list_experiences().await {
        Ok(rows) => rows.into_iter().map(Experience::from).collect(),
        Err(e) => {
            tracing::error!("Failed to list experiences: {}", e);
            return render_error(format!("Failed to load the portfolio: {}", e));
        }
    };

    HtmlTemplate(HomeTemplate {
        skills,
        projects,
        experiences,
    })
    .into_response()
}

fn render_error(description: String) -> Response {
    HtmlTemplate(ErrorTemplate {
        description,
        back_url: "/".to_string(),
    })
    .into_response()
}

/// Persist one contact message. Values are stored verbatim; no format
/// checks are applied to the email or phone fields.
async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let name = form.name.unwrap_or_default();
    let email = form.email.unwrap_or_default();
    let phone = form.phone.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    match state
        .db
        .create_contact_message(&name, &email, &phone, &message)
        .await
    {
        Ok(id) => {
            tracing::info!(message_id = id, name = name.as_str(), "Contact message received");
            Json(SubmitResponse {
                success: true,
                message: "Message sent successfully!".to_string(),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to store contact message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store contact message: {}", e),
            )
                .into_response()
        }
    }
}

/// Any method other than POST on the contact endpoint. Nothing is persisted.
async fn contact_method_not_allowed() -> Json<SubmitResponse> {
    Json(SubmitResponse {
        success: false,
        message: "Invalid request method".to_string(),
    })
}

/// All received contact messages, newest first.
async fn message_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.list_contact_messages().await {
        Ok(rows) => {
            let messages: Vec<ContactMessage> =
                rows.into_iter().map(ContactMessage::from).collect();
            HtmlTemplate(MessageListTemplate { messages }).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list contact messages: {}", e);
            render_error(format!("Failed to load messages: {}", e))
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route(
            "/contact-submit/",
            post(contact_submit).fallback(contact_method_not_allowed),
        )
        .route("/messages/", get(message_list))
        .route("/health", get(|| async { "OK" }))
}

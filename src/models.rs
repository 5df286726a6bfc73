//! Domain Models
//!
//! Business entities that represent the core domain.
//! These are independent of the database layer.

use serde::{Deserialize, Serialize};

use crate::database::{ContactMessageRow, ExperienceRow, ProjectRow, SkillRow};

/// Split a comma-separated field into its segments, trimming surrounding
/// whitespace. Order is preserved and empty segments are kept, so an input
/// without commas comes back as a single trimmed segment.
pub fn split_trim(raw: &str) -> Vec<String> {
    raw.split(',').map(|segment| segment.trim().to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon_class: Option<String>,
    pub image_url: Option<String>,
    pub delay: f64,
}

impl From<SkillRow> for Skill {
    fn from(row: SkillRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            icon_class: row.icon_class,
            image_url: row.image_url,
            delay: row.delay,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech_stack: String,
    pub live_demo_url: Option<String>,
    pub github_url: Option<String>,
    pub delay: f64,
}

impl Project {
    pub fn tech_list(&self) -> Vec<String> {
        split_trim(&self.tech_stack)
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            title: row.title,
            description: row.description,
            image: row.image,
            tech_stack: row.tech_stack,
            live_demo_url: row.live_demo_url,
            github_url: row.github_url,
            delay: row.delay,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub duration: String,
    pub description: String,
    pub responsibilities: String,
    pub tech_stack: String,
    pub icon_class: String,
    pub delay: f64,
}

impl Experience {
    pub fn responsibilities_list(&self) -> Vec<String> {
        split_trim(&self.responsibilities)
    }

    pub fn tech_list(&self) -> Vec<String> {
        split_trim(&self.tech_stack)
    }
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: row.id,
            role: row.role,
            company: row.company,
            location: row.location,
            duration: row.duration,
            description: row.description,
            responsibilities: row.responsibilities,
            tech_stack: row.tech_stack,
            icon_class: row.icon_class,
            delay: row.delay,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: String,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

// DTOs for creating display entities through the admin API

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub description: String,
    pub icon_class: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub delay: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech_stack: String,
    pub live_demo_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub delay: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub duration: String,
    pub description: String,
    pub responsibilities: String,
    pub tech_stack: String,
    #[serde(default = "default_experience_icon")]
    pub icon_class: String,
    #[serde(default)]
    pub delay: f64,
}

fn default_experience_icon() -> String {
    "fas fa-laptop-code".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trim_multiple_segments() {
        assert_eq!(split_trim("HTML5, CSS, JS"), vec!["HTML5", "CSS", "JS"]);
    }

    #[test]
    fn test_split_trim_single_segment() {
        assert_eq!(split_trim("Go"), vec!["Go"]);
    }

    #[test]
    fn test_split_trim_empty_input() {
        assert_eq!(split_trim(""), vec![""]);
    }

    #[test]
    fn test_split_trim_keeps_empty_segments() {
        assert_eq!(split_trim("Rust,, SQL"), vec!["Rust", "", "SQL"]);
    }

    #[test]
    fn test_split_trim_is_idempotent_on_trimmed_input() {
        assert_eq!(split_trim("  Docker  "), vec!["Docker"]);
    }

    #[test]
    fn test_project_tech_list() {
        let project = Project {
            id: 1,
            name: "folio".to_string(),
            title: "Portfolio".to_string(),
            description: "A portfolio site".to_string(),
            image: "uploads/folio.png".to_string(),
            tech_stack: "Rust, Axum , SQLite".to_string(),
            live_demo_url: None,
            github_url: Some("https://github.com/example/folio".to_string()),
            delay: 0.0,
        };
        assert_eq!(project.tech_list(), vec!["Rust", "Axum", "SQLite"]);
    }

    #[test]
    fn test_experience_derived_lists() {
        let experience = Experience {
            id: 1,
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            duration: "2022 - 2024".to_string(),
            description: "Built services".to_string(),
            responsibilities: "API design, On-call rotation".to_string(),
            tech_stack: "Rust".to_string(),
            icon_class: "fas fa-laptop-code".to_string(),
            delay: 0.2,
        };
        assert_eq!(
            experience.responsibilities_list(),
            vec!["API design", "On-call rotation"]
        );
        assert_eq!(experience.tech_list(), vec!["Rust"]);
    }

    #[test]
    fn test_create_experience_request_default_icon() {
        let req: CreateExperienceRequest = serde_json::from_value(serde_json::json!({
            "role": "Engineer",
            "company": "Acme",
            "duration": "2023",
            "description": "Work",
            "responsibilities": "Things",
            "tech_stack": "Rust"
        }))
        .unwrap();
        assert_eq!(req.icon_class, "fas fa-laptop-code");
        assert_eq!(req.delay, 0.0);
    }
}

//! Database Infrastructure Layer
//!
//! Handles database connection, schema initialization, and provides
//! data access methods for skills, projects, experiences and contact
//! messages.

use std::{ops::Deref, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use tracing::info;

use crate::models::{CreateExperienceRequest, CreateProjectRequest, CreateSkillRequest};

#[derive(Debug)]
pub enum DatabaseError {
    Connection(sqlx::Error),
    Query(sqlx::Error),
}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::Connection(err) => write!(f, "Database connection error: {}", err),
            DatabaseError::Query(err) => write!(f, "Database query error: {}", err),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Connection(err) | DatabaseError::Query(err) => Some(err),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::Query(err)
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Database row for the skills table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SkillRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon_class: Option<String>,
    pub image_url: Option<String>,
    pub delay: f64,
}

/// Database row for the projects table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
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

/// Database row for the experiences table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExperienceRow {
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

/// Database row for the contact_messages table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactMessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Deref for Database {
    type Target = SqlitePool;
    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let database_config = SqliteConnectOptions::from_str(database_url)
            .map_err(DatabaseError::Connection)?
            .create_if_missing(true);

        let pool = SqlitePool::connect_lazy_with(database_config);

        let db = Self { pool };
        db.initialize_tables().await?;

        info!("Database initialized at {}", database_url);
        Ok(db)
    }

    async fn initialize_tables(&self) -> Result<()> {
        // Skills table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                icon_class TEXT,
                image_url TEXT,
                delay REAL NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Projects table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image TEXT NOT NULL,
                tech_stack TEXT NOT NULL,
                live_demo_url TEXT,
                github_url TEXT,
                delay REAL NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Experiences table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS experiences (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                role TEXT NOT NULL,
                company TEXT NOT NULL,
                location TEXT,
                duration TEXT NOT NULL,
                description TEXT NOT NULL,
                responsibilities TEXT NOT NULL,
                tech_stack TEXT NOT NULL,
                icon_class TEXT NOT NULL DEFAULT 'fas fa-laptop-code',
                delay REAL NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Contact messages table. created_at is set by the database at
        // insert time, never supplied by the client.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_contact_messages_created_at ON contact_messages(created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ========== Skill Operations ==========

    pub async fn create_skill(&self, skill: &CreateSkillRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO skills (name, description, icon_class, image_url, delay)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&skill.name)
        .bind(&skill.description)
        .bind(&skill.icon_class)
        .bind(&skill.image_url)
        .bind(skill.delay)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_skills(&self) -> Result<Vec<SkillRow>> {
        sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, name, description, icon_class, image_url, delay
            FROM skills
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    // ========== Project Operations ==========

    pub async fn create_project(&self, project: &CreateProjectRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (name, title, description, image, tech_stack, live_demo_url, github_url, delay)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.name)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.tech_stack)
        .bind(&project.live_demo_url)
        .bind(&project.github_url)
        .bind(project.delay)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRow>> {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, title, description, image, tech_stack, live_demo_url, github_url, delay
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    // ========== Experience Operations ==========

    pub async fn create_experience(&self, experience: &CreateExperienceRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO experiences (role, company, location, duration, description, responsibilities, tech_stack, icon_class, delay)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&experience.role)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(&experience.duration)
        .bind(&experience.description)
        .bind(&experience.responsibilities)
        .bind(&experience.tech_stack)
        .bind(&experience.icon_class)
        .bind(experience.delay)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_experiences(&self) -> Result<Vec<ExperienceRow>> {
        sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT id, role, company, location, duration, description, responsibilities, tech_stack, icon_class, delay
            FROM experiences
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    // ========== Contact Message Operations ==========

    pub async fn create_contact_message(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, phone, message)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(message)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Newest first. Timestamps have second resolution, so the rowid breaks
    /// ties between messages created within the same second.
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessageRow>> {
        sqlx::query_as::<_, ContactMessageRow>(
            r#"
            SELECT id, name, email, phone, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    /// Substring search across name, email, phone and message, newest first.
    /// LIKE metacharacters in the term are escaped so they match literally.
    pub async fn search_contact_messages(&self, term: &str) -> Result<Vec<ContactMessageRow>> {
        let escaped = term
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{}%", escaped);
        sqlx::query_as::<_, ContactMessageRow>(
            r#"
            SELECT id, name, email, phone, message, created_at
            FROM contact_messages
            WHERE name LIKE ? ESCAPE '\'
               OR email LIKE ? ESCAPE '\'
               OR phone LIKE ? ESCAPE '\'
               OR message LIKE ? ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }
}

use folio::{
    CreateExperienceRequest, CreateProjectRequest, CreateSkillRequest, Database, Experience,
    Project, Skill,
};

fn temp_database_url(name: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let path = std::env::temp_dir().join(format!(
        "folio-store-{}-{}-{}.db",
        name,
        std::process::id(),
        nanos
    ));
    format!("sqlite://{}", path.display())
}

async fn test_database(name: &str) -> Database {
    Database::new(&temp_database_url(name)).await.unwrap()
}

fn skill_request(name: &str) -> CreateSkillRequest {
    CreateSkillRequest {
        name: name.to_string(),
        description: format!("{} description", name),
        icon_class: Some("fab fa-rust".to_string()),
        image_url: None,
        delay: 0.1,
    }
}

#[tokio::test]
async fn test_skills_listed_in_insertion_order() {
    let db = test_database("skills-order").await;

    let first = db.create_skill(&skill_request("HTML5")).await.unwrap();
    let second = db.create_skill(&skill_request("CSS")).await.unwrap();
    let third = db.create_skill(&skill_request("Rust")).await.unwrap();
    assert!(first < second && second < third);

    let skills: Vec<Skill> = db
        .list_skills()
        .await
        .unwrap()
        .into_iter()
        .map(Skill::from)
        .collect();
    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["HTML5", "CSS", "Rust"]);
}

#[tokio::test]
async fn test_project_round_trip_with_derived_tech_list() {
    let db = test_database("project").await;

    let id = db
        .create_project(&CreateProjectRequest {
            name: "folio".to_string(),
            title: "Portfolio Site".to_string(),
            description: "A personal portfolio".to_string(),
            image: "uploads/folio.png".to_string(),
            tech_stack: "Rust, Axum, SQLite".to_string(),
            live_demo_url: Some("https://folio.example.com".to_string()),
            github_url: None,
            delay: 0.0,
        })
        .await
        .unwrap();

    let projects: Vec<Project> = db
        .list_projects()
        .await
        .unwrap()
        .into_iter()
        .map(Project::from)
        .collect();
    assert_eq!(projects.len(), 1);

    let project = &projects[0];
    assert_eq!(project.id, id);
    assert_eq!(project.title, "Portfolio Site");
    assert_eq!(project.live_demo_url.as_deref(), Some("https://folio.example.com"));
    assert_eq!(project.github_url, None);
    assert_eq!(project.tech_list(), vec!["Rust", "Axum", "SQLite"]);
}

#[tokio::test]
async fn test_experience_round_trip_with_default_icon() {
    let db = test_database("experience").await;

    let req: CreateExperienceRequest = serde_json::from_value(serde_json::json!({
        "role": "Backend Engineer",
        "company": "Acme",
        "location": "Remote",
        "duration": "2022 - 2024",
        "description": "Built and ran services",
        "responsibilities": "API design, On-call rotation, Mentoring",
        "tech_stack": "Rust, Postgres"
    }))
    .unwrap();
    db.create_experience(&req).await.unwrap();

    let experiences: Vec<Experience> = db
        .list_experiences()
        .await
        .unwrap()
        .into_iter()
        .map(Experience::from)
        .collect();
    assert_eq!(experiences.len(), 1);

    let experience = &experiences[0];
    assert_eq!(experience.icon_class, "fas fa-laptop-code");
    assert_eq!(
        experience.responsibilities_list(),
        vec!["API design", "On-call rotation", "Mentoring"]
    );
    assert_eq!(experience.tech_list(), vec!["Rust", "Postgres"]);
}

#[tokio::test]
async fn test_contact_messages_newest_first() {
    let db = test_database("messages-order").await;

    db.create_contact_message("A", "a@example.com", "111", "first")
        .await
        .unwrap();
    db.create_contact_message("B", "b@example.com", "222", "second")
        .await
        .unwrap();
    db.create_contact_message("C", "c@example.com", "333", "third")
        .await
        .unwrap();

    let messages = db.list_contact_messages().await.unwrap();
    let names: Vec<&str> = messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
    assert!(messages.iter().all(|m| !m.created_at.is_empty()));
}

#[tokio::test]
async fn test_contact_message_search_filters_all_fields() {
    let db = test_database("messages-search").await;

    db.create_contact_message("Ada Lovelace", "ada@example.com", "555-0100", "About engines")
        .await
        .unwrap();
    db.create_contact_message("Grace Hopper", "grace@example.com", "555-0199", "About compilers")
        .await
        .unwrap();

    let by_name = db.search_contact_messages("Ada").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].email, "ada@example.com");

    let by_message = db.search_contact_messages("compilers").await.unwrap();
    assert_eq!(by_message.len(), 1);
    assert_eq!(by_message[0].name, "Grace Hopper");

    let by_phone = db.search_contact_messages("555-01").await.unwrap();
    assert_eq!(by_phone.len(), 2);

    let none = db.search_contact_messages("nothing-matches").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_contact_message_search_matches_wildcards_literally() {
    let db = test_database("messages-wildcards").await;

    db.create_contact_message("Ada", "ada@example.com", "555-0100", "100% satisfied")
        .await
        .unwrap();
    db.create_contact_message("Grace", "grace@example.com", "555-0199", "100 reasons to write")
        .await
        .unwrap();
    db.create_contact_message("Linus", "linus@example.com", "555-0142", "snake_case naming")
        .await
        .unwrap();

    let percent = db.search_contact_messages("100%").await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "Ada");

    let underscore = db.search_contact_messages("snake_case").await.unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].name, "Linus");

    let bare_underscore = db.search_contact_messages("_").await.unwrap();
    assert_eq!(bare_underscore.len(), 1);
    assert_eq!(bare_underscore[0].name, "Linus");
}

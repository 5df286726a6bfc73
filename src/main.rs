//! Folio - Personal Portfolio Site
//!
//! Serves a server-rendered portfolio: skills, projects and work experience
//! on the home page, a contact form that persists submissions, and a simple
//! list of received messages.
//!
//! ## Architecture
//!
//! - **Skills / Projects / Experiences**: display records, managed through
//!   the admin API and read by the home page
//! - **Contact messages**: append-only, written by the contact form and
//!   listed newest-first

use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = folio::Config::from_env();

    info!(
        database = config.database_url.as_str(),
        bind_address = config.bind_address.as_str(),
        "Starting Folio service"
    );

    let db = folio::Database::new(&config.database_url).await?;
    let state = folio::AppState::new(db);
    let app = folio::routes()
        .nest("/admin", folio::admin_routes())
        .with_state(state);

    info!("Listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutdown signal received, terminating...");
}

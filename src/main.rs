use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_hygiene::api;
use api_hygiene::server;

#[derive(Parser)]
#[command(name = "api-hygiene")]
#[command(about = "Demo service contrasting ambient and injected dependencies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "api-hygiene API",
        description = "Side-by-side handlers: ambient dependencies versus injected collaborators",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::bad_time,
        api::bad_log,
        api::bad_read_file,
        api::good_time,
        api::good_log,
        api::good_read_file,
    ),
    components(schemas(api::TimeResponse)),
    tags(
        (name = "Bad practice", description = "Ambient clock, stdout, blocking file I/O"),
        (name = "Good practice", description = "Injected clock, structured sink, async file I/O")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_hygiene=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let files_root = std::env::var("FILES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    tracing::info!(files_root = %files_root.display(), "File store root configured");

    let state = server::create_app_state(files_root);

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "api-hygiene server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Display status and configuration information
#[allow(clippy::disallowed_macros)] // CLI output, not application logging
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let files_dir = std::env::var("FILES_DIR").ok();

    println!("api-hygiene v{VERSION}");
    println!("Demo service contrasting ambient and injected dependencies\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  FILES_DIR = {}",
        files_dir.as_deref().unwrap_or(". (default)")
    );

    println!("\nEndpoints:");
    println!("  GET  /badpractice/time    ambient wall clock");
    println!("  POST /badpractice/log     println! to stdout");
    println!("  GET  /badpractice/file    blocking read of config.json");
    println!("  GET  /goodpractice/time   injected clock");
    println!("  POST /goodpractice/log    structured sink entry");
    println!("  GET  /goodpractice/file   existence check + async read");

    println!("\nCommands:");
    println!("  api-hygiene serve    Start the HTTP server");
    println!("\nRun 'cargo clippy' to see the banned calls flagged.");
}

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use services::AppServices;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use web::{AppContext, build_router};

/// Exam and interview preparation tracker.
#[derive(Debug, Parser)]
#[command(name = "prep-tracker", version, about)]
struct Args {
    /// SQLite database URL or file path
    #[arg(long = "db", env = "PREP_DB_URL", default_value = "sqlite://database.db")]
    db_url: String,

    /// Address to listen on
    #[arg(long, env = "PREP_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| err.to_string().into())
}

/// Turn a URL or bare path into an absolute `sqlite://` URL.
///
/// In-memory databases and `file:` URIs are left untouched; a query string
/// is carried over.
fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    if rest.starts_with(":memory:") || rest.starts_with("file:") {
        return trimmed.to_string();
    }

    let (path_str, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    }
}

/// Make sure the directory holding the database file exists.
fn prepare_sqlite_dir(db_url: &str) -> std::io::Result<()> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    let parent = Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.debug)?;

    let db_url = normalize_sqlite_url(&args.db_url);
    prepare_sqlite_dir(&db_url)?;

    // Open + migrate before binding.
    let services = AppServices::new_sqlite(&db_url).await?;
    tracing::info!(db = %db_url, "storage ready");

    let app = build_router(AppContext::new(services.clone()));

    let listener = TcpListener::bind(args.bind).await?;
    tracing::info!("Server listening on {}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    services.shutdown().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

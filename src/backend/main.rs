/**
 * Snippetbox Server Entry Point
 *
 * This is the main entry point for the Snippetbox server. It reads the
 * configuration from flags and the environment, initializes tracing and
 * serves the application until the process is stopped.
 */

#[cfg(feature = "ssr")]
use clap::Parser;
#[cfg(feature = "ssr")]
use snipbox::shared::config::{DEFAULT_ADDR, DEFAULT_DATABASE_URL};

/// Command-line flags, each with an environment fallback
#[cfg(feature = "ssr")]
#[derive(Debug, Parser)]
#[command(name = "snipbox-server", about = "Snippet sharing web application")]
struct Args {
    /// HTTP network address
    #[arg(long, env = "SNIPBOX_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// SQLite data source name
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    dsn: String,

    /// Show server error details in responses
    #[arg(long, env = "SNIPBOX_DEBUG")]
    debug: bool,

    /// Serve the session cookie without the Secure attribute (plain HTTP development)
    #[arg(long, env = "SNIPBOX_INSECURE_COOKIES")]
    insecure_cookies: bool,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let config = snipbox::shared::AppConfig::builder()
        .addr(args.addr)
        .database_url(args.dsn)
        .debug(args.debug)
        .secure_cookies(!args.insecure_cookies)
        .build()?;

    let addr = config.addr;
    let app = snipbox::backend::server::create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "starting server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin snipbox-server --features ssr");
    std::process::exit(1);
}

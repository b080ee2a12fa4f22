use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slayer_catalog::client::CatalogClient;
use slayer_catalog::{api, db};

#[derive(Parser)]
#[command(name = "slayer-catalog")]
#[command(about = "Demon Slayer fan-content catalog server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the catalog server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8001")]
        port: u16,
    },
    /// Probe a running server's health endpoint
    Status,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "slayer_catalog=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await?,
        Some(Commands::Status) => {
            let client = CatalogClient::from_env();
            let health = client.health().await?;
            println!(
                "Catalog server is {} (database {})",
                health.status, health.database
            );
        }
        None => serve(8001).await?,
    }

    Ok(())
}

async fn serve(port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting catalog server on port {}", port);

    let db = db::Database::open_default()?;
    db.migrate()?;
    db.seed()?;

    let app = api::create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Catalog server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use userbase_config::load as load_config;
use userbase_gateway::{create_router, GatewayState};
use userbase_runtime::{telemetry, BackendServices};

#[derive(Parser)]
#[command(name = "userbase")]
#[command(about = "Userbase user service (serves HTTP by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Load configuration, connect to the database and apply migrations, then exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Check => run_check().await,
    }
}

async fn run_server() -> anyhow::Result<()> {
    info!("starting Userbase");

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let app = create_router(GatewayState::from_pool(services.pool().clone()));

    let address = config.http.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(userbase_runtime::shutdown_signal())
        .await
        .context("http server error");

    services.shutdown().await;
    served?;

    info!("server shut down");
    Ok(())
}

async fn run_check() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    services
        .database
        .test_connection()
        .await
        .context("database did not answer")?;

    println!("configuration ok, database reachable, migrations applied");
    services.shutdown().await;
    Ok(())
}

use anyhow::{Context, Result};
use sqlx::AnyPool;
use tracing::info;
use userbase_config::AppConfig;
use userbase_database::{initialize_database, DatabaseConnection};

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Install the global fmt subscriber. `RUST_LOG` overrides the `info` default.
    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::TRACE)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Long-lived resources shared by every request.
pub struct BackendServices {
    pub database: DatabaseConnection,
}

impl BackendServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let pool = initialize_database(&config.database)
            .await
            .context("failed to initialise database")?;

        info!(
            max_connections = config.database.max_connections,
            "database ready"
        );

        Ok(Self {
            database: DatabaseConnection::from_pool(pool),
        })
    }

    pub fn pool(&self) -> &AnyPool {
        self.database.pool()
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn shutdown(self) {
        self.database.close().await;
        info!("backend services stopped");
    }
}

/// Resolves on Ctrl+C, or on SIGTERM where the platform has it.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(?error, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(?error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

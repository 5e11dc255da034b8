use chapel_site::{
    config::SiteConfig,
    store::{self, migration, seed},
    telemetry, AppError, AppState, CacheProbe, MaudRenderer, PgStore, RecordStore, RedisProbe,
};
use clap::{Parser, Subcommand};
use std::future::IntoFuture;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// In-flight requests get this long after a shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(name = "chapel-site", version, about = "Congregation website server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Apply or roll back schema migrations.
    Migrate {
        #[command(subcommand)]
        direction: Direction,
    },
    /// Insert demo content.
    Seed,
}

#[derive(Subcommand)]
enum Direction {
    /// Apply all pending migrations.
    Up,
    /// Roll back the most recent migration.
    Down,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match chapel_site::load_from_env() {
        Ok(c) => c,
        Err(e) => {
            telemetry::init(true);
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(config.is_development());

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate { direction } => migrate(&config, direction).await,
        Command::Seed => run_seed(&config).await,
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            ExitCode::FAILURE
        }
    }
}

async fn migrate(config: &SiteConfig, direction: Direction) -> Result<(), AppError> {
    let pool = store::connect(config).await?;
    match direction {
        Direction::Up => {
            migration::migrate_up(&pool).await?;
        }
        Direction::Down => {
            migration::migrate_down(&pool).await?;
        }
    }
    pool.close().await;
    Ok(())
}

async fn run_seed(config: &SiteConfig) -> Result<(), AppError> {
    let pool = store::connect(config).await?;
    seed::seed(&pool).await?;
    pool.close().await;
    Ok(())
}

async fn serve(config: SiteConfig) -> Result<(), AppError> {
    let pool = store::connect(&config).await?;
    let store = Arc::new(PgStore::new(pool.clone()));
    store.ping().await?;

    let cache = Arc::new(RedisProbe::from_url(&config.redis_url)?);
    cache.ping().await?;
    tracing::info!("connected to Redis");

    let state = AppState::new(store, cache, Arc::new(MaudRenderer::new(config.app_url.clone())));
    let app = chapel_site::app(state, &config.static_dir);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, env = config.app_env.as_str(), "listening");

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = stop_rx.changed().await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        res = &mut server => {
            if let Err(e) = res {
                tracing::error!(error = %e, "server error");
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("shutting down");
            let _ = stop_tx.send(true);
            match tokio::time::timeout(DRAIN_TIMEOUT, &mut server).await {
                Ok(Err(e)) => tracing::error!(error = %e, "server error during shutdown"),
                Ok(Ok(())) => {}
                Err(_) => tracing::warn!("drain window elapsed; dropping open connections"),
            }
        }
    }

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
}

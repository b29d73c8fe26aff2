//! PetConnect API server binary.
//!
//! Startup order matters: the pool is opened and migrations are applied
//! before the listener binds, so no request is ever handled against an
//! unmigrated database.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "petconnect_server", about = "PetConnect API server")]
struct Args {
    /// Host address to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/petconnect"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,petconnect_api=debug,petconnect_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting petconnect_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    petconnect_api::migrate(&pool).await?;

    let config = petconnect_api::config::ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        jwt_secret: petconnect_core::auth::jwt::resolve_jwt_secret(),
        google: petconnect_api::services::google::GoogleConfig::from_env(),
    };

    let state = petconnect_api::AppState {
        pool: pool.clone(),
        config: config.clone(),
    };

    let app = petconnect_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    // Release the pool before exiting so the database sees a clean close.
    pool.close().await;
    info!("server stopped");

    Ok(())
}

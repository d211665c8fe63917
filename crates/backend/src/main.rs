use tokio::net::TcpListener;

use backend::shared::{config, data};
use backend::{routes, system};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let app_config = config::load_config()?;
    let db_path = config::get_database_path(&app_config)?;
    let addr = app_config.server.socket_addr()?;
    config::install(app_config);

    tracing::info!("Database: {}", db_path.display());
    data::migration_runner::run_migrations(&db_path).await?;
    data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    match system::users::repository::count_users().await {
        Ok(count) => tracing::info!("{} registered user(s)", count),
        Err(e) => tracing::warn!("Could not count users: {}", e),
    }

    let app = routes::configure_routes();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

use mirror_server::build_router;
use mirror_server::{AppState, error::ServerError, logger};

use mirror_auth::{IdentityVerifier, JwtAlgorithm, VerifierOptions};
use mirror_config::Config;
use mirror_db::PoolSettings;

use std::error::Error;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting mirror-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    let pool = mirror_db::connect(
        &database_path,
        PoolSettings {
            max_connections: config.database.max_connections,
            busy_timeout: config.database_busy_timeout(),
        },
    )
    .await?;

    info!("Running database migrations...");
    mirror_db::migrate(&pool).await?;
    info!("Migrations complete");

    let verifier = build_verifier(&config)?;
    info!("Identity verifier ready ({})", verifier.algorithm());

    let app = build_router(AppState::new(pool, verifier, config.sync.failure_policy));

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_verifier(config: &Config) -> Result<IdentityVerifier, ServerError> {
    let options = VerifierOptions {
        issuer: config.auth.issuer.clone(),
        audience: config.auth.audience.clone(),
        leeway_secs: config.auth.leeway_secs,
    };

    let algorithm = match (&config.auth.jwt_secret, config.jwt_public_key_path()?) {
        (Some(secret), _) => JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        },
        (None, Some(full_path)) => {
            let public_key_pem =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;
            JwtAlgorithm::RS256 { public_key_pem }
        }
        // validate() rejects this
        (None, None) => {
            return Err(ServerError::Config(mirror_config::ConfigError::auth(
                "no JWT key material configured",
            )));
        }
    };

    Ok(IdentityVerifier::new(&algorithm, &options)?)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}

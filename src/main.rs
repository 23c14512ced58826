mod config;
mod domain;
mod infrastructure;
mod logging;
mod presentation;
#[cfg(test)]
mod test_utils;
mod usecase;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    infrastructure::{
        account_repository::SeaOrmAccountRepository,
        argon2_password_hasher::Argon2PasswordHasher,
        rand_value_generator::ThreadRngValueGenerator,
    },
    logging::init_logging,
    presentation::router::create_router,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_logging(&config.log_level)?;

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .sqlx_logging(config.database.sql_logging);

    info!("connecting to database");
    let db = Database::connect(opt).await?;

    if config.database.run_migrations {
        Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let account_repository = SeaOrmAccountRepository::new(db);
    let password_hasher = Argon2PasswordHasher::with_cost(
        config.hasher.memory_kib,
        config.hasher.iterations,
        config.hasher.parallelism,
    )?;

    let app = create_router(
        account_repository,
        password_hasher,
        ThreadRngValueGenerator::new(),
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "account service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

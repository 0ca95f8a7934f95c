use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod food_item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod recipe {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod env;
    pub mod inventory_config;
    pub mod openai_config;
    pub mod server_config;
}

mod setup {
    pub mod clock;
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Food inventory REST API entry point
///
/// - config/: environment-driven configuration (server, CORS, database, OpenAI, inventory)
/// - setup/: dependency wiring, clock and HTTP server
/// - api/: route handlers, DTOs and error mappers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.openai, &config.inventory);

    // 6. Seed reference data
    let report = container.seed_catalog_use_case.execute().await?;
    tracing::info!(
        entries = report.entries_inserted,
        categories = report.categories_inserted,
        "catalog seeded"
    );

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}

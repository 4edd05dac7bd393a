pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::users;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::users::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::users::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::users::application::services::{AddUserService, FetchUserService, ListUsersService};
use crate::users::application::use_cases::{
    add_user::AddUserUseCase, fetch_user::FetchUserUseCase, list_users::ListUsersUseCase,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub add_user_use_case: Arc<dyn AddUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn ListUsersUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let environment = AppConfig::load_env_files();

    #[cfg(feature = "test-helpers")]
    {
        if environment == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "Test helper routes are ENABLED for environment: {}",
            environment
        );
    }

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let server_url = config.server_url();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        add_user_use_case: Arc::new(AddUserService::new(user_repo)),
        fetch_user_use_case: Arc::new(FetchUserService::new(user_query.clone())),
        list_users_use_case: Arc::new(ListUsersService::new(user_query)),
    };

    let openapi = ApiDoc::openapi();
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users: ping goes before /users/{id}, which would otherwise claim it
    cfg.service(crate::users::adapter::incoming::web::routes::ping_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::add_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::fetch_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

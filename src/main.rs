pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::upload;
pub use modules::user;

use crate::config::AppConfig;
use crate::shared::web::{session_middleware, take_pending_flash};
use crate::upload::adapter::outgoing::LocalImageStore;
use crate::upload::application::{
    domain::policies::UploadPolicy,
    ports::{incoming::use_cases::StoreImageUseCase, outgoing::ImageStore},
    services::StoreImageService,
};
use crate::user::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::user::application::{
    ports::{
        incoming::use_cases::{
            CreateUserUseCase, DeleteUserUseCase, FetchUserUseCase, ListUsersUseCase,
            UpdateUserUseCase,
        },
        outgoing::{UserQuery, UserRepository},
    },
    services::{
        CreateUserService, DeleteUserService, FetchUserService, ListUsersService,
        UpdateUserService,
    },
};

use actix_files::Files;
use actix_web::{
    middleware::{from_fn, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_users_use_case: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub store_image_use_case: Arc<dyn StoreImageUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

impl AppState {
    /// Wire every use case onto the given ports.
    pub fn new<Q, R, S>(query: Q, repository: R, images: S, upload_policy: UploadPolicy) -> Self
    where
        Q: UserQuery + Clone + 'static,
        R: UserRepository + Clone + 'static,
        S: ImageStore + Clone + 'static,
    {
        Self {
            list_users_use_case: Arc::new(ListUsersService::new(query.clone())),
            create_user_use_case: Arc::new(CreateUserService::new(
                query.clone(),
                repository.clone(),
                images.clone(),
                upload_policy.keep_rejected_uploads,
            )),
            fetch_user_use_case: Arc::new(FetchUserService::new(query)),
            update_user_use_case: Arc::new(UpdateUserService::new(
                repository.clone(),
                images.clone(),
            )),
            delete_user_use_case: Arc::new(DeleteUserService::new(repository, images.clone())),
            store_image_use_case: Arc::new(StoreImageService::new(images, upload_policy.clone())),
            upload_policy,
        }
    }
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

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.upload_dir.display()))?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let upload_policy = config.upload_policy();
    let image_store = LocalImageStore::with_policy(config.upload_dir.clone(), &upload_policy);
    let upload_dir = image_store.root().to_path_buf();

    let state = AppState::new(user_query, user_repo, image_store, upload_policy);

    if config.session_secret.is_none() {
        warn!("SESSION_SECRET not set; using a random session key for this process");
    }
    let session_key = config.session_key();
    let cookie_secure = config.session_cookie_secure;

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!(host = %config.host, port = config.port, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .wrap(from_fn(take_pending_flash))
            .wrap(session_middleware(session_key.clone(), cookie_secure))
            .wrap(Logger::default())
            .configure(init_routes)
            .service(Files::new("/", upload_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::add_user_form_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::edit_user_form_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

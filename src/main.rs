//! LearnTrack server binary
//!
//! Wires configuration, the PostgreSQL pool, chain resolution, and the HTTP
//! router together, then serves until SIGINT or SIGTERM.

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use learntrack::adapters::auth::{OidcConfig, OidcTokenValidator};
use learntrack::adapters::http::middleware::AuthState;
use learntrack::adapters::http::{
    api_router, CourseHandlers, LearnerHandlers, TaskHandlers, UnitHandlers,
};
use learntrack::adapters::postgres::{
    PostgresCourseRepository, PostgresLearnerRepository, PostgresResourceDirectory,
    PostgresTaskRepository, PostgresUnitRepository,
};
use learntrack::application::handlers::{
    CompleteTaskHandler, CreateCourseHandler, CreateTaskHandler, CreateUnitHandler,
    DeleteCourseHandler, DeleteTaskHandler, DeleteUnitHandler, GetCourseHandler,
    GetLearnerHandler, GetTaskHandler, GetUnitHandler, ListCoursesHandler, ListTasksHandler,
    ListUnitsHandler, RegisterLearnerHandler, UpdateCourseHandler, UpdateTaskHandler,
    UpdateUnitHandler,
};
use learntrack::application::OwnershipResolver;
use learntrack::config::AppConfig;
use learntrack::domain::resolver::RelationRegistry;
use learntrack::ports::{
    CourseRepository, LearnerRepository, TaskRepository, UnitRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "Starting learntrack"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Chain resolution wiring
    let registry = Arc::new(RelationRegistry::standard());
    let directory = Arc::new(PostgresResourceDirectory::new(
        pool.clone(),
        registry.clone(),
    ));
    let resolver = Arc::new(OwnershipResolver::new(registry, directory));

    // Repositories
    let courses: Arc<dyn CourseRepository> = Arc::new(PostgresCourseRepository::new(pool.clone()));
    let units: Arc<dyn UnitRepository> = Arc::new(PostgresUnitRepository::new(pool.clone()));
    let tasks: Arc<dyn TaskRepository> = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let learners: Arc<dyn LearnerRepository> = Arc::new(PostgresLearnerRepository::new(pool));

    // Application handlers
    let course_handlers = CourseHandlers::new(
        Arc::new(CreateCourseHandler::new(courses.clone())),
        Arc::new(ListCoursesHandler::new(courses.clone())),
        Arc::new(GetCourseHandler::new(resolver.clone(), courses.clone())),
        Arc::new(UpdateCourseHandler::new(resolver.clone(), courses.clone())),
        Arc::new(DeleteCourseHandler::new(
            resolver.clone(),
            courses,
            units.clone(),
        )),
    );
    let unit_handlers = UnitHandlers::new(
        Arc::new(CreateUnitHandler::new(resolver.clone(), units.clone())),
        Arc::new(ListUnitsHandler::new(resolver.clone(), units.clone())),
        Arc::new(GetUnitHandler::new(resolver.clone(), units.clone())),
        Arc::new(UpdateUnitHandler::new(resolver.clone(), units.clone())),
        Arc::new(DeleteUnitHandler::new(resolver.clone(), units, tasks.clone())),
    );
    let task_handlers = TaskHandlers::new(
        Arc::new(CreateTaskHandler::new(resolver.clone(), tasks.clone())),
        Arc::new(ListTasksHandler::new(resolver.clone(), tasks.clone())),
        Arc::new(GetTaskHandler::new(resolver.clone(), tasks.clone())),
        Arc::new(UpdateTaskHandler::new(resolver.clone(), tasks.clone())),
        Arc::new(DeleteTaskHandler::new(resolver.clone(), tasks.clone())),
        Arc::new(CompleteTaskHandler::new(resolver, tasks)),
    );
    let learner_handlers = LearnerHandlers::new(
        Arc::new(RegisterLearnerHandler::new(learners.clone())),
        Arc::new(GetLearnerHandler::new(learners)),
    );

    // Token validation
    let oidc_config = OidcConfig::new(&config.auth.issuer_url, &config.auth.audience)
        .with_cache_duration(config.auth.jwks_cache_ttl());
    let validator: AuthState = Arc::new(OidcTokenValidator::new(oidc_config));

    let app = api_router(
        validator,
        course_handlers,
        unit_handlers,
        task_handlers,
        learner_handlers,
    )
    .layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(CompressionLayer::new())
            .layer(cors_layer(&config)),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

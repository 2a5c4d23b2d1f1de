//! LearnHub Server — Online Course Platform Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use learnhub_core::config::AppConfig;
use learnhub_core::error::AppError;
use learnhub_core::events::EventBus;
use learnhub_database::connection::DatabasePool;
use learnhub_database::repositories::{
    CategoryRepository, CertificateRepository, CourseRepository, EnrollmentRepository,
    LessonRepository, PaymentRepository, ProgressLogRepository, ResourceRepository,
    ReviewRepository, TagRelationRepository, TagRepository,
};
use learnhub_service::{
    CategoryService, CertificateService, CourseService, EnrollmentService, LessonService,
    PaymentService, ProgressLogService, ResourceService, ReviewService, TagRelationService,
    TagService,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("LEARNHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Configuration loaded (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LearnHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let database = DatabasePool::connect(&config.database).await?;
    let db_pool = database.pool().clone();

    learnhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let course_repo = Arc::new(CourseRepository::new(db_pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
    let lesson_repo = Arc::new(LessonRepository::new(db_pool.clone()));
    let enrollment_repo = Arc::new(EnrollmentRepository::new(db_pool.clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let tag_repo = Arc::new(TagRepository::new(db_pool.clone()));
    let tag_relation_repo = Arc::new(TagRelationRepository::new(db_pool.clone()));
    let certificate_repo = Arc::new(CertificateRepository::new(db_pool.clone()));
    let progress_log_repo = Arc::new(ProgressLogRepository::new(db_pool.clone()));
    let resource_repo = Arc::new(ResourceRepository::new(db_pool.clone()));

    // ── Step 3: Domain event bus + audit logger ──────────────────
    let events = EventBus::new();
    spawn_event_logger(&events);

    // ── Step 4: Initialize services ──────────────────────────────
    let course_service = Arc::new(CourseService::new(
        Arc::clone(&course_repo),
        Arc::clone(&category_repo),
        events.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&category_repo),
        events.clone(),
    ));
    let lesson_service = Arc::new(LessonService::new(
        Arc::clone(&lesson_repo),
        Arc::clone(&course_repo),
        events.clone(),
    ));
    let enrollment_service = Arc::new(EnrollmentService::new(
        Arc::clone(&enrollment_repo),
        Arc::clone(&course_repo),
        events.clone(),
    ));
    let payment_service = Arc::new(PaymentService::new(
        Arc::clone(&payment_repo),
        Arc::clone(&course_repo),
        events.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&course_repo),
        events.clone(),
    ));
    let tag_service = Arc::new(TagService::new(Arc::clone(&tag_repo), events.clone()));
    let tag_relation_service = Arc::new(TagRelationService::new(
        Arc::clone(&tag_relation_repo),
        Arc::clone(&course_repo),
        Arc::clone(&tag_repo),
        events.clone(),
    ));
    let certificate_service = Arc::new(CertificateService::new(
        Arc::clone(&certificate_repo),
        Arc::clone(&enrollment_repo),
        events.clone(),
    ));
    let progress_log_service = Arc::new(ProgressLogService::new(
        Arc::clone(&progress_log_repo),
        Arc::clone(&enrollment_repo),
        Arc::clone(&lesson_repo),
        events.clone(),
    ));
    let resource_service = Arc::new(ResourceService::new(
        Arc::clone(&resource_repo),
        Arc::clone(&course_repo),
        events.clone(),
    ));

    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = learnhub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        course_service,
        category_service,
        lesson_service,
        enrollment_service,
        payment_service,
        review_service,
        tag_service,
        tag_relation_service,
        certificate_service,
        progress_log_service,
        resource_service,
    };

    let app = learnhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LearnHub server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    let mut server = std::pin::pin!(server.into_future());
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = shutdown_rx.changed().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.server.shutdown_grace_seconds,
                "Grace period expired, dropping remaining connections"
            );
        }
    }

    database.close().await;
    tracing::info!("LearnHub server shut down gracefully");
    Ok(())
}

/// Subscribe to the event bus and log every domain event.
fn spawn_event_logger(events: &EventBus) {
    let mut rx = events.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    tracing::info!(
                        event = %event.name(),
                        event_id = %event.id,
                        entity_id = event.entity_id,
                        timestamp = %event.timestamp,
                        "Domain event"
                    );
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event logger lagged behind the bus");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

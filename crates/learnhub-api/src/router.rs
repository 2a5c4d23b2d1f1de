//! Route definitions for the LearnHub HTTP API.
//!
//! All routes are organized by entity and mounted under `/api`. Every
//! entity exposes the same six endpoints: paginated list, select options,
//! get by id, create, update, delete.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(course_routes())
        .merge(category_routes())
        .merge(lesson_routes())
        .merge(enrollment_routes())
        .merge(payment_routes())
        .merge(review_routes())
        .merge(tag_routes())
        .merge(tag_relation_routes())
        .merge(certificate_routes())
        .merge(progress_log_routes())
        .merge(resource_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::course::list_courses))
        .route("/courses", post(handlers::course::create_course))
        .route("/courses/all", get(handlers::course::list_course_options))
        .route("/courses/{id}", get(handlers::course::get_course))
        .route("/courses/{id}", put(handlers::course::update_course))
        .route("/courses/{id}", delete(handlers::course::delete_course))
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/course-categories", get(handlers::category::list_categories))
        .route("/course-categories", post(handlers::category::create_category))
        .route(
            "/course-categories/all",
            get(handlers::category::list_category_options),
        )
        .route("/course-categories/{id}", get(handlers::category::get_category))
        .route(
            "/course-categories/{id}",
            put(handlers::category::update_category),
        )
        .route(
            "/course-categories/{id}",
            delete(handlers::category::delete_category),
        )
}

fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(handlers::lesson::list_lessons))
        .route("/lessons", post(handlers::lesson::create_lesson))
        .route("/lessons/all", get(handlers::lesson::list_lesson_options))
        .route("/lessons/{id}", get(handlers::lesson::get_lesson))
        .route("/lessons/{id}", put(handlers::lesson::update_lesson))
        .route("/lessons/{id}", delete(handlers::lesson::delete_lesson))
}

fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/enrollments", get(handlers::enrollment::list_enrollments))
        .route("/enrollments", post(handlers::enrollment::create_enrollment))
        .route(
            "/enrollments/all",
            get(handlers::enrollment::list_enrollment_options),
        )
        .route("/enrollments/{id}", get(handlers::enrollment::get_enrollment))
        .route(
            "/enrollments/{id}",
            put(handlers::enrollment::update_enrollment),
        )
        .route(
            "/enrollments/{id}",
            delete(handlers::enrollment::delete_enrollment),
        )
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(handlers::payment::list_payments))
        .route("/payments", post(handlers::payment::create_payment))
        .route("/payments/all", get(handlers::payment::list_payment_options))
        .route("/payments/{id}", get(handlers::payment::get_payment))
        .route("/payments/{id}", put(handlers::payment::update_payment))
        .route("/payments/{id}", delete(handlers::payment::delete_payment))
}

fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(handlers::review::list_reviews))
        .route("/reviews", post(handlers::review::create_review))
        .route("/reviews/all", get(handlers::review::list_review_options))
        .route("/reviews/{id}", get(handlers::review::get_review))
        .route("/reviews/{id}", put(handlers::review::update_review))
        .route("/reviews/{id}", delete(handlers::review::delete_review))
}

fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/course-tags", get(handlers::tag::list_tags))
        .route("/course-tags", post(handlers::tag::create_tag))
        .route("/course-tags/all", get(handlers::tag::list_tag_options))
        .route("/course-tags/{id}", get(handlers::tag::get_tag))
        .route("/course-tags/{id}", put(handlers::tag::update_tag))
        .route("/course-tags/{id}", delete(handlers::tag::delete_tag))
}

fn tag_relation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/course-tag-relations",
            get(handlers::tag_relation::list_tag_relations),
        )
        .route(
            "/course-tag-relations",
            post(handlers::tag_relation::create_tag_relation),
        )
        .route(
            "/course-tag-relations/all",
            get(handlers::tag_relation::list_tag_relation_options),
        )
        .route(
            "/course-tag-relations/{id}",
            get(handlers::tag_relation::get_tag_relation),
        )
        .route(
            "/course-tag-relations/{id}",
            put(handlers::tag_relation::update_tag_relation),
        )
        .route(
            "/course-tag-relations/{id}",
            delete(handlers::tag_relation::delete_tag_relation),
        )
}

fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/course-certificates",
            get(handlers::certificate::list_certificates),
        )
        .route(
            "/course-certificates",
            post(handlers::certificate::create_certificate),
        )
        .route(
            "/course-certificates/all",
            get(handlers::certificate::list_certificate_options),
        )
        .route(
            "/course-certificates/{id}",
            get(handlers::certificate::get_certificate),
        )
        .route(
            "/course-certificates/{id}",
            put(handlers::certificate::update_certificate),
        )
        .route(
            "/course-certificates/{id}",
            delete(handlers::certificate::delete_certificate),
        )
}

fn progress_log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/course-progress-logs",
            get(handlers::progress_log::list_progress_logs),
        )
        .route(
            "/course-progress-logs",
            post(handlers::progress_log::create_progress_log),
        )
        .route(
            "/course-progress-logs/all",
            get(handlers::progress_log::list_progress_log_options),
        )
        .route(
            "/course-progress-logs/{id}",
            get(handlers::progress_log::get_progress_log),
        )
        .route(
            "/course-progress-logs/{id}",
            put(handlers::progress_log::update_progress_log),
        )
        .route(
            "/course-progress-logs/{id}",
            delete(handlers::progress_log::delete_progress_log),
        )
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/course-resources", get(handlers::resource::list_resources))
        .route("/course-resources", post(handlers::resource::create_resource))
        .route(
            "/course-resources/all",
            get(handlers::resource::list_resource_options),
        )
        .route(
            "/course-resources/{id}",
            get(handlers::resource::get_resource),
        )
        .route(
            "/course-resources/{id}",
            put(handlers::resource::update_resource),
        )
        .route(
            "/course-resources/{id}",
            delete(handlers::resource::delete_resource),
        )
}

/// Health check endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::{Any, CorsLayer};

    let cors_config = &state.config.server.cors;

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

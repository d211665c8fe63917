use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Every route of the application, with request logging and CORS applied
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    public_routes()
        .merge(protected_routes())
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

fn public_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/register",
            post(system::handlers::auth::register),
        )
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // Help widget
        .route(
            "/api/chatbot",
            get(handlers::chatbot::greeting).post(handlers::chatbot::reply),
        )
}

/// Routes scoped to the signed-in user
fn protected_routes() -> Router {
    Router::new()
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        // A001 Sale records
        .route(
            "/api/sales",
            get(handlers::a001_sale_record::list).post(handlers::a001_sale_record::create),
        )
        .route(
            "/api/sales/:id",
            get(handlers::a001_sale_record::get_by_id).delete(handlers::a001_sale_record::delete),
        )
        // A002 Shop profile
        .route(
            "/api/profile",
            get(handlers::a002_shop_profile::get).put(handlers::a002_shop_profile::save),
        )
        // D400 Sales analytics
        .route(
            "/api/d400/sales_analytics",
            get(handlers::d400_sales_analytics::get_sales_analytics),
        )
        .route(
            "/api/d400/sales_analytics/export",
            get(handlers::d400_sales_analytics::export_sales_report),
        )
        // D401 Sales forecast
        .route(
            "/api/d401/sales_forecast",
            get(handlers::d401_sales_forecast::get_sales_forecast),
        )
        .route(
            "/api/d401/sales_forecast/export",
            get(handlers::d401_sales_forecast::export_forecast_report),
        )
        .route_layer(middleware::from_fn(system::auth::middleware::require_auth))
}

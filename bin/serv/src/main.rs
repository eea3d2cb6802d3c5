use axum::{Router, middleware, routing::get};
use tekrar_api::{
    config::ApiConfig,
    metrics,
    middleware::{cors, request_id, security_headers},
    router,
    state::ApiState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    tekrar_api::tracing::init_tracing(&config.env);
    let metrics_handle = metrics::init_metrics()?;

    // Initialize the application state
    let state = ApiState::new(&config);

    // Create the application router
    let app = router::router()
        .with_state(state)
        .merge(
            Router::new()
                .route("/metrics", get(metrics::metrics_handler))
                .with_state(metrics_handle),
        )
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors::create_cors_layer(config.allowed_origins.clone()));
    let app = security_headers::apply_security_headers(app, config.env);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

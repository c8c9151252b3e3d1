use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::ingest::Ingestor;

/// Short shared-cache lifetime so CDNs absorb repeat page loads without
/// pinning a dead feed for long.
const FEED_CACHE_CONTROL: &str = "public, max-age=300";

pub async fn serve(port: u16) -> anyhow::Result<()> {
    let ingestor = Ingestor::from_env();

    let app = create_router().with_state(ingestor);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("PrizmBet feed server listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn create_router() -> Router<Ingestor> {
    Router::new()
        .route("/health", get(health_check))
        .route("/matches.json", get(matches_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /matches.json: one ingestion pass per request. 200 with the feed
/// document, or 502 with the well-formed error document; never a partial
/// match list.
async fn matches_handler(State(ingestor): State<Ingestor>) -> Response {
    match ingestor.run().await {
        Ok(doc) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, FEED_CACHE_CONTROL)],
            Json(doc),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Ingestion failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                [(header::CACHE_CONTROL, FEED_CACHE_CONTROL)],
                Json(e.to_document()),
            )
                .into_response()
        }
    }
}

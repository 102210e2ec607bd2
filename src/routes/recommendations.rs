use actix_web::{web, HttpResponse, Responder};
use crate::core::Recommender;
use crate::models::{HealthResponse, UserProfile};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(get_recommendations));
}

/// Health check endpoint
///
/// GET /ai/health
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// Recommendation endpoint
///
/// POST /ai/recommend
///
/// Request body: a JSON object describing the user (no required
/// fields). Response: the catalog ranked by freshly drawn scores, as a
/// JSON array of `{"product_name": ..., "score": ...}`.
async fn get_recommendations(
    state: web::Data<AppState>,
    profile: web::Json<UserProfile>,
) -> impl Responder {
    tracing::debug!("Generating recommendations ({} profile fields)", profile.fields.len());

    let recommendations = state.recommender.recommend(&profile);

    tracing::info!("Returning {} ranked products", recommendations.len());

    HttpResponse::Ok().json(recommendations)
}

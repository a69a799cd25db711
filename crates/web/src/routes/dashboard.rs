//! Dashboard JSON endpoints for polling clients.
//!
//! Each endpoint runs exactly one fetch, the same one the streamed page
//! uses for the matching section.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tally_core::dashboard::{
    Card, CardMetrics, LatestInvoice, RevenueChart, RevenuePoint, cards_for,
};

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/cards", get(get_cards))
        .route("/dashboard/revenue", get(get_revenue))
        .route("/dashboard/latest-invoices", get(get_latest_invoices))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the summary cards.
#[derive(Debug, Serialize)]
pub struct CardsResponse {
    /// Raw metrics.
    pub metrics: CardMetrics,
    /// Cards in display order.
    pub cards: Vec<Card>,
}

/// Response for revenue.
#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    /// Monthly revenue in calendar order.
    pub revenue: Vec<RevenuePoint>,
    /// Chart layout, absent for an empty series.
    pub chart: Option<RevenueChart>,
}

/// Response for latest invoices.
#[derive(Debug, Serialize)]
pub struct LatestInvoicesResponse {
    /// Invoices, newest first.
    pub invoices: Vec<LatestInvoice>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /dashboard/cards
async fn get_cards(State(state): State<AppState>) -> Result<Json<CardsResponse>, ApiError> {
    let metrics = state.source.fetch_card_data().await?;
    let cards = cards_for(&metrics).to_vec();

    Ok(Json(CardsResponse { metrics, cards }))
}

/// GET /dashboard/revenue
async fn get_revenue(State(state): State<AppState>) -> Result<Json<RevenueResponse>, ApiError> {
    let revenue = state.source.fetch_revenue().await?;
    let chart = RevenueChart::layout(&revenue);

    Ok(Json(RevenueResponse { revenue, chart }))
}

/// GET /dashboard/latest-invoices
async fn get_latest_invoices(
    State(state): State<AppState>,
) -> Result<Json<LatestInvoicesResponse>, ApiError> {
    let invoices = state.source.fetch_latest_invoices().await?;

    Ok(Json(LatestInvoicesResponse { invoices }))
}

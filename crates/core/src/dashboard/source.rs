//! Data access seam for the dashboard.

use async_trait::async_trait;
use tally_shared::AppResult;

use super::types::{CardMetrics, LatestInvoice, RevenuePoint};

/// Where the dashboard reads its data from.
///
/// Each call is independent and may fail; callers do not retry.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Aggregate invoice and customer metrics.
    async fn fetch_card_data(&self) -> AppResult<CardMetrics>;

    /// Monthly revenue in calendar order.
    async fn fetch_revenue(&self) -> AppResult<Vec<RevenuePoint>>;

    /// Most recent invoices, newest first.
    async fn fetch_latest_invoices(&self) -> AppResult<Vec<LatestInvoice>>;
}

//! Dashboard data types.

use serde::{Deserialize, Serialize};
use tally_shared::Money;
use uuid::Uuid;

/// Aggregate counters and totals shown in the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetrics {
    /// Number of invoices issued.
    pub number_of_invoices: u64,
    /// Number of customers.
    pub number_of_customers: u64,
    /// Sum of paid invoices.
    pub total_paid_invoices: Money,
    /// Sum of invoices still pending.
    pub total_pending_invoices: Money,
}

/// Revenue for one month of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Short month label (e.g. "Jan").
    pub month: String,
    /// Revenue booked in the month.
    pub revenue: Money,
}

/// One row of the latest invoices panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    /// Invoice ID.
    pub id: Uuid,
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer avatar path.
    pub image_url: String,
    /// Invoice amount.
    pub amount: Money,
}

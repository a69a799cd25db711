//! In-memory dashboard source for web tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use tally_core::dashboard::{CardMetrics, DashboardSource, LatestInvoice, RevenuePoint};
use tally_shared::{AppError, AppResult, Currency, Money};
use tokio::sync::Notify;
use uuid::Uuid;

/// Source whose sections can be held back or made to fail.
#[derive(Default)]
pub struct FakeSource {
    pub cards_gate: Option<Arc<Notify>>,
    pub revenue_gate: Option<Arc<Notify>>,
    pub invoices_gate: Option<Arc<Notify>>,
    pub fail_cards: bool,
    pub fail_revenue: bool,
    pub fail_invoices: bool,
}

impl FakeSource {
    pub fn failing_everywhere() -> Self {
        Self {
            fail_cards: true,
            fail_revenue: true,
            fail_invoices: true,
            ..Self::default()
        }
    }

    pub fn gated_everywhere(gate: &Arc<Notify>) -> Self {
        Self {
            cards_gate: Some(Arc::clone(gate)),
            revenue_gate: Some(Arc::clone(gate)),
            invoices_gate: Some(Arc::clone(gate)),
            ..Self::default()
        }
    }
}

async fn wait(gate: Option<&Arc<Notify>>) {
    if let Some(gate) = gate {
        gate.notified().await;
    }
}

fn unavailable() -> AppError {
    AppError::Database("connection reset by peer".to_string())
}

pub fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::Usd)
}

pub fn sample_metrics() -> CardMetrics {
    CardMetrics {
        number_of_invoices: 12,
        number_of_customers: 5,
        total_paid_invoices: usd(dec!(1000)),
        total_pending_invoices: usd(dec!(250)),
    }
}

pub fn sample_revenue() -> Vec<RevenuePoint> {
    [("Jan", dec!(2000)), ("Feb", dec!(1800)), ("Mar", dec!(3450))]
        .into_iter()
        .map(|(month, revenue)| RevenuePoint {
            month: month.to_string(),
            revenue: usd(revenue),
        })
        .collect()
}

pub fn sample_invoices() -> Vec<LatestInvoice> {
    vec![
        LatestInvoice {
            id: Uuid::new_v4(),
            name: "Delba de Oliveira".to_string(),
            email: "delba@oliveira.com".to_string(),
            image_url: "/customers/delba-de-oliveira.png".to_string(),
            amount: usd(dec!(157.95)),
        },
        LatestInvoice {
            id: Uuid::new_v4(),
            name: "Lee Robinson".to_string(),
            email: "lee@robinson.com".to_string(),
            image_url: "/customers/lee-robinson.png".to_string(),
            amount: usd(dec!(203.48)),
        },
    ]
}

#[async_trait]
impl DashboardSource for FakeSource {
    async fn fetch_card_data(&self) -> AppResult<CardMetrics> {
        wait(self.cards_gate.as_ref()).await;
        if self.fail_cards {
            return Err(unavailable());
        }
        Ok(sample_metrics())
    }

    async fn fetch_revenue(&self) -> AppResult<Vec<RevenuePoint>> {
        wait(self.revenue_gate.as_ref()).await;
        if self.fail_revenue {
            return Err(unavailable());
        }
        Ok(sample_revenue())
    }

    async fn fetch_latest_invoices(&self) -> AppResult<Vec<LatestInvoice>> {
        wait(self.invoices_gate.as_ref()).await;
        if self.fail_invoices {
            return Err(unavailable());
        }
        Ok(sample_invoices())
    }
}

//! Dashboard repository for card metrics, revenue and latest invoices.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait, sea_query::Expr,
};
use tally_core::dashboard::{CardMetrics, DashboardSource, LatestInvoice, RevenuePoint};
use tally_shared::{AppError, AppResult, Currency, DashboardConfig, Money};
use tracing::debug;
use uuid::Uuid;

use crate::entities::{customers, invoices, revenue};

/// Error types for dashboard queries.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct StatusTotalsRow {
    paid: Option<i64>,
    pending: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct LatestInvoiceRow {
    id: Uuid,
    amount: i32,
    name: String,
    email: String,
    image_url: String,
}

/// Dashboard repository, the Postgres-backed [`DashboardSource`].
#[derive(Debug)]
pub struct DashboardRepository {
    db: DatabaseConnection,
    currency: Currency,
    latest_invoices_limit: u64,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &DashboardConfig) -> Self {
        Self {
            db,
            currency: config.currency,
            latest_invoices_limit: config.latest_invoices_limit,
        }
    }

    /// Hands back the connection, so tests can read the mock transaction log.
    #[cfg(test)]
    fn into_connection(self) -> DatabaseConnection {
        self.db
    }

    /// Counts all invoices.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_invoices(&self) -> Result<u64, DashboardError> {
        let row = invoices::Entity::find()
            .select_only()
            .column_as(invoices::Column::Id.count(), "count")
            .into_model::<CountRow>()
            .one(&self.db)
            .await?;
        Ok(row.map_or(0, |r| u64::try_from(r.count).unwrap_or_default()))
    }

    /// Counts all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_customers(&self) -> Result<u64, DashboardError> {
        let row = customers::Entity::find()
            .select_only()
            .column_as(customers::Column::Id.count(), "count")
            .into_model::<CountRow>()
            .one(&self.db)
            .await?;
        Ok(row.map_or(0, |r| u64::try_from(r.count).unwrap_or_default()))
    }

    /// Sums invoice amounts by status, returning `(paid, pending)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn status_totals(&self) -> Result<(Money, Money), DashboardError> {
        let row = invoices::Entity::find()
            .select_only()
            .column_as(
                Expr::cust("SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END)"),
                "paid",
            )
            .column_as(
                Expr::cust("SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END)"),
                "pending",
            )
            .into_model::<StatusTotalsRow>()
            .one(&self.db)
            .await?;

        // SUM over an empty table is NULL
        let (paid, pending) = row.map_or((0, 0), |r| {
            (r.paid.unwrap_or_default(), r.pending.unwrap_or_default())
        });
        Ok((
            Money::from_minor(paid, self.currency),
            Money::from_minor(pending, self.currency),
        ))
    }

    /// Queries revenue for every month in calendar order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_revenue(&self) -> Result<Vec<RevenuePoint>, DashboardError> {
        let rows = revenue::Entity::find()
            .order_by_asc(revenue::Column::MonthIndex)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| RevenuePoint {
                month: r.month,
                revenue: Money::new(Decimal::from(r.revenue), self.currency),
            })
            .collect())
    }

    /// Queries the most recent invoices with their customers, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn query_latest_invoices(&self) -> Result<Vec<LatestInvoice>, DashboardError> {
        let rows = invoices::Entity::find()
            .select_only()
            .column(invoices::Column::Id)
            .column(invoices::Column::Amount)
            .column(customers::Column::Name)
            .column(customers::Column::Email)
            .column(customers::Column::ImageUrl)
            .join(JoinType::InnerJoin, invoices::Relation::Customers.def())
            .order_by_desc(invoices::Column::Date)
            .limit(self.latest_invoices_limit)
            .into_model::<LatestInvoiceRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| LatestInvoice {
                id: r.id,
                name: r.name,
                email: r.email,
                image_url: r.image_url,
                amount: Money::from_minor(i64::from(r.amount), self.currency),
            })
            .collect())
    }
}

#[async_trait]
impl DashboardSource for DashboardRepository {
    async fn fetch_card_data(&self) -> AppResult<CardMetrics> {
        let (number_of_invoices, number_of_customers, (paid, pending)) = tokio::try_join!(
            self.count_invoices(),
            self.count_customers(),
            self.status_totals(),
        )?;
        debug!(number_of_invoices, number_of_customers, "Fetched card data");

        Ok(CardMetrics {
            number_of_invoices,
            number_of_customers,
            total_paid_invoices: paid,
            total_pending_invoices: pending,
        })
    }

    async fn fetch_revenue(&self) -> AppResult<Vec<RevenuePoint>> {
        let points = self.query_revenue().await?;
        debug!(months = points.len(), "Fetched revenue");
        Ok(points)
    }

    async fn fetch_latest_invoices(&self) -> AppResult<Vec<LatestInvoice>> {
        let invoices = self.query_latest_invoices().await?;
        debug!(count = invoices.len(), "Fetched latest invoices");
        Ok(invoices)
    }
}

//! Dashboard schema migration.
//!
//! Creates customers, invoices and monthly revenue tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DASHBOARD_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS invoices CASCADE;
             DROP TABLE IF EXISTS customers CASCADE;
             DROP TABLE IF EXISTS revenue CASCADE;
             DROP TYPE IF EXISTS invoice_status;",
        )
        .await?;
        Ok(())
    }
}

const DASHBOARD_SQL: &str = r"
CREATE TYPE invoice_status AS ENUM ('pending', 'paid');

CREATE TABLE customers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    image_url VARCHAR(255) NOT NULL
);

-- Amounts in cents
CREATE TABLE invoices (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    customer_id UUID NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
    amount INTEGER NOT NULL,
    status invoice_status NOT NULL,
    date DATE NOT NULL,
    CONSTRAINT chk_invoice_amount_non_negative CHECK (amount >= 0)
);

-- Latest invoices panel reads newest first
CREATE INDEX idx_invoices_date ON invoices(date DESC);

-- Status totals for the summary cards
CREATE INDEX idx_invoices_status ON invoices(status);

-- Amounts in whole units
CREATE TABLE revenue (
    month VARCHAR(4) PRIMARY KEY,
    month_index SMALLINT NOT NULL UNIQUE,
    revenue INTEGER NOT NULL,
    CONSTRAINT chk_revenue_month_index CHECK (month_index BETWEEN 1 AND 12)
);
";

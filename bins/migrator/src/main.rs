//! Database migration runner for Tally.
//!
//! Usage:
//!   migrator up      - Create the customers, invoices and revenue tables
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations
//!
//! The migration CLI takes its own connection string: `DATABASE_URL` (a
//! `.env` file is honoured) or `-u <url>`. It does not read `TALLY__*`
//! settings, so point it at the same URL as `database.url`.

use sea_orm_migration::prelude::*;
use tally_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI sets up its own tracing
    cli::run_cli(Migrator).await;
}

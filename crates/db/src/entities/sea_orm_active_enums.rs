//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_status")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, not yet paid.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Paid in full.
    #[sea_orm(string_value = "paid")]
    Paid,
}

//! `SeaORM` entity definitions.

pub mod customers;
pub mod invoices;
pub mod revenue;
pub mod sea_orm_active_enums;

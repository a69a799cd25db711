//! Core domain logic for Tally.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `dashboard` - Dashboard data types, section boundaries, card and chart layout

pub mod dashboard;

//! Dashboard metrics, sections and loading state.
//!
//! This module provides:
//! - Data types for cards, revenue and latest invoices
//! - The `DashboardSource` trait implemented by the data layer
//! - Suspense boundaries tracking each section's loading state
//! - Card and chart layout

pub mod boundary;
pub mod cards;
pub mod chart;
pub mod error;
pub mod source;
pub mod types;

pub use boundary::{Boundary, BoundaryStatus, Outcome, PageProgress, SectionId, Settled};
pub use cards::{CARD_COUNT, Card, CardKind, CardValue, cards_for};
pub use chart::{ChartBar, RevenueChart};
pub use error::BoundaryError;
pub use source::DashboardSource;
pub use types::*;

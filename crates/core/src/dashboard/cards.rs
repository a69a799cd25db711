//! Summary cards built from [`CardMetrics`].

use std::fmt;

use serde::Serialize;
use tally_shared::Money;

use super::types::CardMetrics;

/// Which metric a card shows. Drives the card's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Paid total.
    Collected,
    /// Pending total.
    Pending,
    /// Invoice count.
    Invoices,
    /// Customer count.
    Customers,
}

impl CardKind {
    /// Stable lowercase name used in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collected => "collected",
            Self::Pending => "pending",
            Self::Invoices => "invoices",
            Self::Customers => "customers",
        }
    }
}

/// Value printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardValue {
    /// A currency amount.
    Amount(Money),
    /// A plain count.
    Count(u64),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(money) => write!(f, "{money}"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// A single summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card heading.
    pub title: &'static str,
    /// Displayed value.
    pub value: CardValue,
    /// Metric kind.
    pub kind: CardKind,
}

/// Number of summary cards on the dashboard.
pub const CARD_COUNT: usize = 4;

/// Builds the summary cards in display order:
/// Collected, Pending, Total Invoices, Total Customers.
#[must_use]
pub fn cards_for(metrics: &CardMetrics) -> [Card; CARD_COUNT] {
    [
        Card {
            title: "Collected",
            value: CardValue::Amount(metrics.total_paid_invoices),
            kind: CardKind::Collected,
        },
        Card {
            title: "Pending",
            value: CardValue::Amount(metrics.total_pending_invoices),
            kind: CardKind::Pending,
        },
        Card {
            title: "Total Invoices",
            value: CardValue::Count(metrics.number_of_invoices),
            kind: CardKind::Invoices,
        },
        Card {
            title: "Total Customers",
            value: CardValue::Count(metrics.number_of_customers),
            kind: CardKind::Customers,
        },
    ]
}

//! Revenue bar chart layout.
//!
//! Only maps each point to a bar height relative to a rounded top label.

use rust_decimal::Decimal;
use serde::Serialize;
use tally_shared::{Currency, Money};

use super::types::RevenuePoint;

/// Labels are rounded to whole thousands.
const LABEL_UNIT: Decimal = Decimal::ONE_THOUSAND;

/// Number of steps between the top label and zero.
const AXIS_STEPS: u32 = 4;

/// One bar of the revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    /// Month label under the bar.
    pub month: String,
    /// Revenue for the month.
    pub revenue: Money,
    /// Bar height as a percentage of the top label, in `0..=100`.
    pub height_percent: Decimal,
}

/// Laid-out revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueChart {
    /// Y axis labels from the top value down to zero.
    pub y_axis_labels: Vec<String>,
    /// Value of the top label.
    pub top: Decimal,
    /// Bars in input order.
    pub bars: Vec<ChartBar>,
}

impl RevenueChart {
    /// Lays out a chart for the given series. Returns `None` for an empty series.
    #[must_use]
    pub fn layout(points: &[RevenuePoint]) -> Option<Self> {
        let currency = points.first()?.revenue.currency;
        let highest = points
            .iter()
            .map(|p| p.revenue.amount)
            .max()
            .unwrap_or(Decimal::ZERO);
        let top = ((highest / LABEL_UNIT).ceil() * LABEL_UNIT).max(LABEL_UNIT);

        let bars = points
            .iter()
            .map(|p| ChartBar {
                month: p.month.clone(),
                revenue: p.revenue,
                height_percent: (p.revenue.amount / top * Decimal::ONE_HUNDRED)
                    .round_dp(2)
                    .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            })
            .collect();

        Some(Self {
            y_axis_labels: axis_labels(top, currency),
            top,
            bars,
        })
    }
}

fn axis_labels(top: Decimal, currency: Currency) -> Vec<String> {
    let steps = Decimal::from(AXIS_STEPS);
    (0..=AXIS_STEPS)
        .rev()
        .map(|i| {
            let value = top * Decimal::from(i) / steps / LABEL_UNIT;
            format!("{}{}K", currency.symbol(), value.normalize())
        })
        .collect()
}

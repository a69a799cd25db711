//! Suspense boundaries for the dashboard sections.
//!
//! Every section starts pending (its skeleton is shown) and settles exactly
//! once per request, either with content or with the error that stopped it.
//! `Boundary` can only be settled by value, so a settled section can never go
//! back to showing its skeleton. `PageProgress` tracks the same lifecycle for
//! the whole page.

use std::fmt;

use serde::Serialize;
use tally_shared::{AppError, AppResult};

use super::error::BoundaryError;

/// The independently loading sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Summary cards.
    Cards,
    /// Revenue chart.
    Revenue,
    /// Latest invoices list.
    LatestInvoices,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 3] = [Self::Cards, Self::Revenue, Self::LatestInvoices];

    /// Identifier used in element ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Revenue => "revenue",
            Self::LatestInvoices => "latest-invoices",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cards => "Key Metrics",
            Self::Revenue => "Revenue",
            Self::LatestInvoices => "Latest Invoices",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Cards => 0,
            Self::Revenue => 1,
            Self::LatestInvoices => 2,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Observable state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryStatus {
    /// Skeleton shown.
    Pending,
    /// Real content shown.
    Resolved,
    /// Error panel shown.
    Failed,
}

impl BoundaryStatus {
    /// Lowercase name used in `data-state` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }
}

/// A section whose data has not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    section: SectionId,
}

impl Boundary {
    /// Opens a pending boundary.
    #[must_use]
    pub const fn pending(section: SectionId) -> Self {
        Self { section }
    }

    /// The section this boundary wraps.
    #[must_use]
    pub const fn section(&self) -> SectionId {
        self.section
    }

    /// Settles the boundary with the result of its fetch.
    ///
    /// Errors are kept, not swallowed: they become the failed outcome.
    pub fn settle<T>(self, result: AppResult<T>) -> Settled<T> {
        let outcome = match result {
            Ok(data) => Outcome::Resolved(data),
            Err(err) => Outcome::Failed(err),
        };
        Settled {
            section: self.section,
            outcome,
        }
    }
}

/// How a section settled.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Data arrived.
    Resolved(T),
    /// The fetch failed.
    Failed(AppError),
}

/// A boundary after its fetch completed.
#[derive(Debug)]
pub struct Settled<T> {
    section: SectionId,
    outcome: Outcome<T>,
}

impl<T> Settled<T> {
    /// The section this boundary wraps.
    #[must_use]
    pub const fn section(&self) -> SectionId {
        self.section
    }

    /// How the section settled.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Resolved or failed; never pending.
    #[must_use]
    pub const fn status(&self) -> BoundaryStatus {
        match self.outcome {
            Outcome::Resolved(_) => BoundaryStatus::Resolved,
            Outcome::Failed(_) => BoundaryStatus::Failed,
        }
    }
}

/// Per-request record of which sections have settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProgress {
    states: [BoundaryStatus; 3],
}

impl Default for PageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PageProgress {
    /// All sections pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: [BoundaryStatus::Pending; 3],
        }
    }

    /// Current state of a section.
    #[must_use]
    pub const fn status(&self, section: SectionId) -> BoundaryStatus {
        self.states[section.index()]
    }

    /// Records a settlement. A section settles once and never returns to pending.
    pub fn record(
        &mut self,
        section: SectionId,
        status: BoundaryStatus,
    ) -> Result<(), BoundaryError> {
        if status == BoundaryStatus::Pending {
            return Err(BoundaryError::NotSettled(section));
        }
        let slot = &mut self.states[section.index()];
        if *slot != BoundaryStatus::Pending {
            return Err(BoundaryError::AlreadySettled(section));
        }
        *slot = status;
        Ok(())
    }

    /// True once every section has settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|s| *s != BoundaryStatus::Pending)
    }

    /// Sections that settled with an error.
    pub fn failed(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL
            .into_iter()
            .filter(|s| self.status(*s) == BoundaryStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_ok_resolves() {
        let settled = Boundary::pending(SectionId::Cards).settle(Ok(42));
        assert_eq!(settled.section(), SectionId::Cards);
        assert_eq!(settled.status(), BoundaryStatus::Resolved);
        assert!(matches!(settled.outcome(), Outcome::Resolved(42)));
    }

    #[test]
    fn test_settle_err_keeps_error() {
        let settled: Settled<()> = Boundary::pending(SectionId::Revenue)
            .settle(Err(AppError::Database("connection reset".into())));
        assert_eq!(settled.status(), BoundaryStatus::Failed);
        match settled.outcome() {
            Outcome::Failed(err) => assert_eq!(err.to_string(), "Database error: connection reset"),
            Outcome::Resolved(()) => panic!("failure must not resolve"),
        }
    }

    #[test]
    fn test_progress_starts_pending() {
        let progress = PageProgress::new();
        for section in SectionId::ALL {
            assert_eq!(progress.status(section), BoundaryStatus::Pending);
        }
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_settles_once() {
        let mut progress = PageProgress::new();
        progress
            .record(SectionId::Revenue, BoundaryStatus::Resolved)
            .unwrap();

        assert_eq!(
            progress.record(SectionId::Revenue, BoundaryStatus::Failed),
            Err(BoundaryError::AlreadySettled(SectionId::Revenue))
        );
        assert_eq!(
            progress.status(SectionId::Revenue),
            BoundaryStatus::Resolved
        );
    }

    #[test]
    fn test_progress_rejects_pending() {
        let mut progress = PageProgress::new();
        assert_eq!(
            progress.record(SectionId::Cards, BoundaryStatus::Pending),
            Err(BoundaryError::NotSettled(SectionId::Cards))
        );
    }

    #[test]
    fn test_progress_sections_are_independent() {
        let mut progress = PageProgress::new();
        progress
            .record(SectionId::LatestInvoices, BoundaryStatus::Resolved)
            .unwrap();
        progress
            .record(SectionId::Cards, BoundaryStatus::Failed)
            .unwrap();

        assert_eq!(progress.status(SectionId::Revenue), BoundaryStatus::Pending);
        assert!(!progress.is_complete());

        progress
            .record(SectionId::Revenue, BoundaryStatus::Resolved)
            .unwrap();
        assert!(progress.is_complete());
        assert_eq!(progress.failed().collect::<Vec<_>>(), [SectionId::Cards]);
    }

    #[test]
    fn test_section_slugs() {
        let slugs: Vec<_> = SectionId::ALL.iter().map(|s| s.slug()).collect();
        assert_eq!(slugs, ["cards", "revenue", "latest-invoices"]);
        assert_eq!(SectionId::LatestInvoices.to_string(), "latest-invoices");
    }
}

//! Streamed dashboard body.
//!
//! The shell goes out first with every section showing its skeleton. Each
//! section's fetch runs as its own future; whichever settles first is
//! patched in first. The document tail follows the last patch.

use std::{future::Future, sync::Arc, time::Instant};

use futures::{
    FutureExt, Stream, StreamExt,
    future::{self, BoxFuture},
    stream::{self, FuturesUnordered},
};
use tally_core::dashboard::{
    Boundary, BoundaryStatus, DashboardSource, Outcome, PageProgress, SectionId, cards_for,
};
use tally_shared::AppResult;
use tracing::{debug, error, info, warn};

use crate::render;

/// Markup produced when a section settles.
#[derive(Debug, Clone)]
pub struct SectionPatch {
    /// Section the patch belongs to.
    pub section: SectionId,
    /// How the section settled.
    pub status: BoundaryStatus,
    /// Template plus swap script.
    pub html: String,
}

/// Awaits one section's fetch and turns the outcome into a patch.
///
/// A failed fetch settles the boundary as failed: the section gets an error
/// panel and the error is logged. It never yields partial content.
pub async fn settle_section<T, Fut, R>(
    boundary: Boundary,
    fetch: Fut,
    render_content: R,
) -> SectionPatch
where
    Fut: Future<Output = AppResult<T>>,
    R: FnOnce(&T) -> AppResult<String>,
{
    let started = Instant::now();
    let settled = boundary.settle(fetch.await);
    let section = settled.section();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (status, content) = match settled.outcome() {
        Outcome::Resolved(data) => match render_content(data) {
            Ok(html) => {
                debug!(%section, elapsed_ms, "Section resolved");
                (BoundaryStatus::Resolved, Ok(html))
            }
            Err(err) => {
                error!(%section, error = %err, "Failed to render section");
                (BoundaryStatus::Failed, render::section_error(section, &err))
            }
        },
        Outcome::Failed(err) => {
            error!(%section, elapsed_ms, error = %err, "Section fetch failed");
            (BoundaryStatus::Failed, render::section_error(section, err))
        }
    };

    match content.and_then(|content| render::patch(section, status, &content)) {
        Ok(html) => SectionPatch {
            section,
            status,
            html,
        },
        Err(err) => {
            error!(%section, error = %err, "Failed to render section patch");
            SectionPatch {
                section,
                status: BoundaryStatus::Failed,
                html: render::fallback_patch(section),
            }
        }
    }
}

fn section_future(
    section: SectionId,
    source: Arc<dyn DashboardSource>,
) -> BoxFuture<'static, SectionPatch> {
    let boundary = Boundary::pending(section);
    match section {
        SectionId::Cards => settle_section(
            boundary,
            async move { source.fetch_card_data().await },
            |metrics| render::cards(&cards_for(metrics)),
        )
        .boxed(),
        SectionId::Revenue => settle_section(
            boundary,
            async move { source.fetch_revenue().await },
            |points| render::revenue_chart(points),
        )
        .boxed(),
        SectionId::LatestInvoices => settle_section(
            boundary,
            async move { source.fetch_latest_invoices().await },
            |invoices| render::latest_invoices(invoices),
        )
        .boxed(),
    }
}

/// Builds the chunks of the dashboard document in emission order:
/// shell, one patch per section as it settles, then the tail.
///
/// All fetches start when the stream is first polled. Dropping the stream
/// drops any fetch still in flight.
///
/// # Errors
///
/// Returns an error if the shell fails to render. Section failures never
/// surface here; they become error panels inside the stream.
pub fn dashboard_stream(
    source: Arc<dyn DashboardSource>,
) -> AppResult<impl Stream<Item = String> + Send + 'static> {
    let shell = render::shell()?;
    let started = Instant::now();

    let sections: FuturesUnordered<_> = SectionId::ALL
        .into_iter()
        .map(|section| section_future(section, Arc::clone(&source)))
        .collect();

    let mut progress = PageProgress::new();
    let patches = sections.filter_map(move |patch| {
        let html = match progress.record(patch.section, patch.status) {
            Ok(()) => Some(patch.html),
            Err(err) => {
                warn!(error = %err, "Dropping patch for settled section");
                None
            }
        };
        if html.is_some() && progress.is_complete() {
            let failed: Vec<&str> = progress.failed().map(SectionId::slug).collect();
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(elapsed_ms, ?failed, "Dashboard streamed");
        }
        future::ready(html)
    });

    Ok(stream::once(future::ready(shell))
        .chain(patches)
        .chain(stream::once(future::ready(
            render::DOCUMENT_TAIL.to_string(),
        ))))
}

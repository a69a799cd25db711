//! Askama templates for the dashboard page and its streamed patches.
//!
//! Templates only read plain strings. Formatting of money, counts and
//! bar heights happens here so markup stays logic-free.

use askama::Template;
use tally_core::dashboard::{
    BoundaryStatus, CARD_COUNT, Card, CardKind, LatestInvoice, RevenueChart, RevenuePoint,
    SectionId,
};
use tally_shared::{AppError, AppResult};

/// Page heading.
pub const PAGE_TITLE: &str = "Dashboard";

/// Line under the page heading.
pub const PAGE_SUBTITLE: &str = "Overview of your business metrics and recent activity";

/// Placeholder rows in the latest invoices skeleton.
pub const INVOICE_SKELETON_ROWS: usize = 5;

/// Closes the document once every section has settled.
pub const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

#[derive(Template)]
#[template(path = "dashboard/shell.html")]
struct ShellTemplate {
    title: &'static str,
    subtitle: &'static str,
    card_count: usize,
    invoice_rows: usize,
}

struct CardView {
    kind: &'static str,
    icon: &'static str,
    title: &'static str,
    value: String,
}

#[derive(Template)]
#[template(path = "dashboard/cards.html")]
struct CardsTemplate {
    cards: Vec<CardView>,
}

struct BarView {
    month: String,
    value: String,
    height_percent: String,
}

#[derive(Template)]
#[template(path = "dashboard/revenue_chart.html")]
struct RevenueChartTemplate {
    labels: Vec<String>,
    bars: Vec<BarView>,
}

struct InvoiceView {
    id: String,
    name: String,
    email: String,
    image_url: String,
    amount: String,
}

#[derive(Template)]
#[template(path = "dashboard/latest_invoices.html")]
struct LatestInvoicesTemplate {
    invoices: Vec<InvoiceView>,
}

#[derive(Template)]
#[template(path = "dashboard/section_error.html")]
struct SectionErrorTemplate {
    label: &'static str,
    code: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard/patch.html")]
struct PatchTemplate<'a> {
    slug: &'static str,
    state: &'static str,
    content: &'a str,
}

fn render_error(err: askama::Error) -> AppError {
    AppError::Render(err.to_string())
}

const fn card_icon(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Collected => "\u{1F4B5}",
        CardKind::Pending => "\u{23F1}",
        CardKind::Invoices => "\u{1F4C4}",
        CardKind::Customers => "\u{1F465}",
    }
}

/// Renders the document head, header and every section in its pending state.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn shell() -> AppResult<String> {
    ShellTemplate {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        card_count: CARD_COUNT,
        invoice_rows: INVOICE_SKELETON_ROWS,
    }
    .render()
    .map_err(render_error)
}

/// Renders the summary cards.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn cards(cards: &[Card]) -> AppResult<String> {
    CardsTemplate {
        cards: cards
            .iter()
            .map(|card| CardView {
                kind: card.kind.as_str(),
                icon: card_icon(card.kind),
                title: card.title,
                value: card.value.to_string(),
            })
            .collect(),
    }
    .render()
    .map_err(render_error)
}

/// Renders the revenue chart, or an empty-state message for an empty series.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn revenue_chart(points: &[RevenuePoint]) -> AppResult<String> {
    let (labels, bars) = RevenueChart::layout(points).map_or_else(
        || (Vec::new(), Vec::new()),
        |chart| {
            let bars = chart
                .bars
                .into_iter()
                .map(|bar| BarView {
                    value: bar.revenue.to_string(),
                    height_percent: bar.height_percent.normalize().to_string(),
                    month: bar.month,
                })
                .collect();
            (chart.y_axis_labels, bars)
        },
    );

    RevenueChartTemplate { labels, bars }
        .render()
        .map_err(render_error)
}

/// Renders the latest invoices list in the order given.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn latest_invoices(invoices: &[LatestInvoice]) -> AppResult<String> {
    LatestInvoicesTemplate {
        invoices: invoices
            .iter()
            .map(|invoice| InvoiceView {
                id: invoice.id.to_string(),
                name: invoice.name.clone(),
                email: invoice.email.clone(),
                image_url: invoice.image_url.clone(),
                amount: invoice.amount.to_string(),
            })
            .collect(),
    }
    .render()
    .map_err(render_error)
}

/// Renders the panel shown in place of a section whose fetch failed.
/// Only the error code reaches the markup.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn section_error(section: SectionId, err: &AppError) -> AppResult<String> {
    SectionErrorTemplate {
        label: section.label(),
        code: err.error_code(),
    }
    .render()
    .map_err(render_error)
}

/// Wraps settled section markup in an inert template plus the script that
/// swaps it into the section's boundary.
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn patch(section: SectionId, status: BoundaryStatus, content: &str) -> AppResult<String> {
    PatchTemplate {
        slug: section.slug(),
        state: status.as_str(),
        content,
    }
    .render()
    .map_err(render_error)
}

/// Last-resort patch used when even the error panel fails to render.
#[must_use]
pub fn fallback_patch(section: SectionId) -> String {
    let slug = section.slug();
    format!(
        "<template id=\"resolved-{slug}\"><p role=\"alert\">Failed to load {label}.</p></template>\n\
         <script>tallyReveal(\"{slug}\", \"{state}\");</script>\n",
        label = section.label(),
        state = BoundaryStatus::Failed.as_str(),
    )
}

//! Streaming behaviour of the dashboard page body.

mod common;

use std::{sync::Arc, time::Duration};

use common::FakeSource;
use futures::StreamExt;
use rstest::rstest;
use tally_web::{
    render::{DOCUMENT_TAIL, PAGE_SUBTITLE, PAGE_TITLE},
    suspense::dashboard_stream,
};
use tokio::{sync::Notify, time::timeout};

async fn collect_chunks(source: FakeSource) -> Vec<String> {
    dashboard_stream(Arc::new(source))
        .unwrap()
        .collect::<Vec<_>>()
        .await
}

fn patch_for<'a>(chunks: &'a [String], slug: &str) -> &'a str {
    let marker = format!("id=\"resolved-{slug}\"");
    chunks
        .iter()
        .find(|chunk| chunk.contains(&marker))
        .map(String::as_str)
        .unwrap_or_else(|| panic!("no patch for {slug}"))
}

#[tokio::test]
async fn test_all_sections_resolve() {
    let chunks = collect_chunks(FakeSource::default()).await;

    // shell, three patches, tail
    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks.last().unwrap(), DOCUMENT_TAIL);

    let cards = patch_for(&chunks, "cards");
    assert_eq!(cards.matches("data-card=").count(), 4);
    assert!(cards.contains("$1,000.00"));
    assert!(cards.contains("$250.00"));

    let revenue = patch_for(&chunks, "revenue");
    assert!(revenue.contains("data-chart=\"revenue\""));
    assert!(revenue.contains("tallyReveal(\"revenue\", \"resolved\")"));

    let invoices = patch_for(&chunks, "latest-invoices");
    assert!(invoices.contains("Delba de Oliveira"));
    assert!(invoices.find("Delba").unwrap() < invoices.find("Lee Robinson").unwrap());
}

#[tokio::test]
async fn test_pending_sections_show_only_skeletons() {
    let gate = Arc::new(Notify::new());
    let mut stream = Box::pin(dashboard_stream(Arc::new(FakeSource::gated_everywhere(&gate))).unwrap());

    let shell = stream.next().await.unwrap();
    assert!(shell.contains("data-skeleton=\"card\""));
    assert!(shell.contains("data-skeleton=\"revenue-chart\""));
    assert!(shell.contains("data-skeleton=\"latest-invoices\""));
    assert!(!shell.contains("data-card="));
    assert!(!shell.contains("data-chart="));
    assert!(!shell.contains("data-invoice="));

    // Nothing else is emitted while every fetch is held back
    let next = timeout(Duration::from_millis(50), stream.next()).await;
    assert!(next.is_err());
}

#[tokio::test]
async fn test_slow_revenue_does_not_delay_other_sections() {
    let gate = Arc::new(Notify::new());
    let source = FakeSource {
        revenue_gate: Some(Arc::clone(&gate)),
        ..FakeSource::default()
    };
    let mut stream = Box::pin(dashboard_stream(Arc::new(source)).unwrap());

    let _shell = stream.next().await.unwrap();
    let first = timeout(Duration::from_secs(1), stream.next()).await.unwrap().unwrap();
    let second = timeout(Duration::from_secs(1), stream.next()).await.unwrap().unwrap();
    let early = [first, second];
    assert!(early.iter().any(|c| c.contains("resolved-cards")));
    assert!(early.iter().any(|c| c.contains("resolved-latest-invoices")));
    assert!(early.iter().all(|c| !c.contains("resolved-revenue")));

    gate.notify_one();
    let third = stream.next().await.unwrap();
    assert!(third.contains("resolved-revenue"));
    assert_eq!(stream.next().await.unwrap(), DOCUMENT_TAIL);
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_revenue_failure_renders_error_panel() {
    let source = FakeSource {
        fail_revenue: true,
        ..FakeSource::default()
    };
    let chunks = collect_chunks(source).await;

    let revenue = patch_for(&chunks, "revenue");
    assert!(revenue.contains("Failed to load Revenue."));
    assert!(revenue.contains("data-error-code=\"DATABASE_ERROR\""));
    assert!(revenue.contains("tallyReveal(\"revenue\", \"failed\")"));
    assert!(!revenue.contains("data-chart"));
    assert!(!revenue.contains("connection reset"));

    // The other sections are unaffected
    assert!(patch_for(&chunks, "cards").contains("\"resolved\""));
    assert!(patch_for(&chunks, "latest-invoices").contains("\"resolved\""));
}

#[rstest]
#[case::all_resolve(FakeSource::default())]
#[case::revenue_fails(FakeSource { fail_revenue: true, ..FakeSource::default() })]
#[case::everything_fails(FakeSource::failing_everywhere())]
#[tokio::test]
async fn test_header_present_on_every_render(#[case] source: FakeSource) {
    let chunks = collect_chunks(source).await;

    let shell = &chunks[0];
    assert!(shell.contains(PAGE_TITLE));
    assert!(shell.contains(PAGE_SUBTITLE));
    assert_eq!(chunks.last().unwrap(), DOCUMENT_TAIL);
}

#[rstest]
#[case::all_resolve(FakeSource::default())]
#[case::everything_fails(FakeSource::failing_everywhere())]
#[tokio::test]
async fn test_patches_never_contain_skeletons(#[case] source: FakeSource) {
    let chunks = collect_chunks(source).await;

    for chunk in &chunks[1..] {
        assert!(!chunk.contains("data-skeleton"));
    }
}

#[tokio::test]
async fn test_each_section_patched_once() {
    let chunks = collect_chunks(FakeSource::default()).await;

    for slug in ["cards", "revenue", "latest-invoices"] {
        let marker = format!("id=\"resolved-{slug}\"");
        let count = chunks.iter().filter(|c| c.contains(&marker)).count();
        assert_eq!(count, 1, "{slug} patched {count} times");
    }
}

//! Overlapping requests and the order their completions land in.

use std::sync::Arc;

use serde_json::json;
use vecview_client::{routes, MockStoreClient, ResponseGate};
use vecview_core::StalePolicy;

use crate::app::{App, BrowserOptions};
use crate::render::RecordingRenderer;
use crate::viewer::pretty;

struct Race {
    mock: Arc<MockStoreClient>,
    app: App<RecordingRenderer>,
    gate_a: ResponseGate,
    gate_b: ResponseGate,
}

/// Collections A and B with distinct documents, both responses held.
async fn race(policy: StalePolicy) -> Race {
    let mock = Arc::new(MockStoreClient::new("http://mock"));
    mock.with_collections(&["A", "B"])
        .with_documents("A", json!(["document from A"]))
        .with_documents("B", json!(["document from B"]));
    let gate_a = mock.hold(&routes::documents("A"));
    let gate_b = mock.hold(&routes::documents("B"));

    let options = BrowserOptions {
        stale_policy: policy,
        ..BrowserOptions::default()
    };
    let mut app = App::new(mock.clone(), RecordingRenderer::new(), options);
    app.refresh();
    app.settle().await;

    Race {
        mock,
        app,
        gate_a,
        gate_b,
    }
}

fn shows(app: &App<RecordingRenderer>, collection: &str) -> bool {
    let expected = pretty(&json!([format!("document from {}", collection)])).unwrap();
    app.renderer().display_text() == Some(expected.as_str())
}

#[tokio::test]
async fn test_b_arriving_first_is_shown() {
    for policy in [StalePolicy::DiscardStale, StalePolicy::LastArrivedWins] {
        let Race {
            mock,
            mut app,
            gate_a,
            gate_b,
        } = race(policy).await;

        app.select("A");
        app.select("B");
        assert_eq!(app.in_flight(), 2);

        gate_b.release();
        assert!(app.pump().await);
        assert!(shows(&app, "B"), "{:?}", policy);
        assert_eq!(app.renderer().active_items(), vec!["B"]);

        // Both requests went out, A's is still pending
        assert_eq!(mock.request_count(), 3);
        drop(gate_a);
        app.settle().await;
    }
}

#[tokio::test]
async fn test_late_stale_response_is_discarded() {
    let Race {
        mut app,
        gate_a,
        gate_b,
        ..
    } = race(StalePolicy::DiscardStale).await;

    app.select("A");
    app.select("B");

    gate_b.release();
    app.pump().await;
    gate_a.release();
    app.pump().await;

    assert!(!app.has_pending());
    assert!(shows(&app, "B"));
    assert_eq!(app.state().active_collection(), Some("B"));
    assert_eq!(app.renderer().display_writes, 1);
}

#[tokio::test]
async fn test_last_arrived_wins_reproduces_the_race() {
    let Race {
        mut app,
        gate_a,
        gate_b,
        ..
    } = race(StalePolicy::LastArrivedWins).await;

    app.select("A");
    app.select("B");

    gate_b.release();
    app.pump().await;
    assert!(shows(&app, "B"));

    gate_a.release();
    app.pump().await;

    // The stale selection's documents overwrite B while B stays selected
    assert!(shows(&app, "A"));
    assert_eq!(app.state().active_collection(), Some("B"));
    assert_eq!(app.renderer().active_items(), vec!["B"]);
}

#[tokio::test]
async fn test_in_order_arrival_shows_latest_selection() {
    for policy in [StalePolicy::DiscardStale, StalePolicy::LastArrivedWins] {
        let Race {
            mut app,
            gate_a,
            gate_b,
            ..
        } = race(policy).await;

        app.select("A");
        app.select("B");

        gate_a.release();
        app.pump().await;
        gate_b.release();
        app.pump().await;

        assert!(shows(&app, "B"), "{:?}", policy);
    }
}

#[tokio::test]
async fn test_search_supersedes_pending_documents() {
    let Race {
        mock,
        mut app,
        gate_a,
        gate_b,
    } = race(StalePolicy::DiscardStale).await;
    drop(gate_b);
    mock.with_search("A", 1, json!(["nearest in A"]));

    app.select("A");
    app.search("query", "1");

    // Search results land first; the older documents response must not win
    app.pump().await;
    assert!(app.renderer().display_text().unwrap().contains("nearest in A"));

    gate_a.release();
    app.pump().await;
    assert!(app.renderer().display_text().unwrap().contains("nearest in A"));
}

#[tokio::test]
async fn test_rejected_search_supersedes_pending_documents() {
    let Race {
        mut app,
        gate_a,
        gate_b,
        ..
    } = race(StalePolicy::DiscardStale).await;
    drop(gate_b);

    app.select("A");
    app.search("", "1");
    assert!(app.renderer().display_error().is_some());

    gate_a.release();
    app.settle().await;
    assert!(app
        .renderer()
        .display_error()
        .unwrap()
        .contains("enter a search query"));
}

#[tokio::test]
async fn test_superseded_refresh_is_discarded() {
    let Race { mock, mut app, .. } = race(StalePolicy::DiscardStale).await;

    let first = mock.hold(routes::LIST_COLLECTIONS);
    app.refresh();
    mock.with_collections(&["A", "B", "C"]);
    app.refresh();

    // Second refresh completes; the first one was held and lands afterwards
    app.pump().await;
    assert_eq!(app.renderer().item_names(), vec!["A", "B", "C"]);

    mock.with_collections(&["stale"]);
    first.release();
    app.pump().await;
    assert_eq!(app.renderer().item_names(), vec!["A", "B", "C"]);
}

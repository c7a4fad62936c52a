use super::*;
use crate::net::api::Method;
use crate::net::fake_transport::{FakeTransport, block_on, client};

fn link(id: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "source_url": format!("https://example.com/article/{id}"),
        "short_url": format!("https://snip.zo/{id}"),
        "created_at": "2024-05-01T12:00:00Z",
        "clicks": id * 2
    })
}

fn page(ids: &[u32], total: u64) -> serde_json::Value {
    serde_json::json!({ "urls": ids.iter().map(|id| link(*id)).collect::<Vec<_>>(), "page": 1, "total": total })
}

fn loaded(ids: &[u32]) -> LinksState {
    let mut state = LinksState::default();
    let ticket = state.begin_fetch();
    let history: HistoryPage = serde_json::from_value(page(ids, ids.len() as u64)).unwrap();
    state.finish_fetch(ticket.generation, Ok(history));
    state
}

// =============================================================
// Paging + filter
// =============================================================

#[test]
fn default_query_is_first_page_of_25() {
    let state = LinksState::default();
    assert_eq!(state.query(), HistoryQuery { page: 1, size: 25, filter: String::new() });
    assert!(state.loading);
}

#[test]
fn total_pages_rounds_up_with_minimum_one() {
    assert_eq!(total_pages(0, 25), 1);
    assert_eq!(total_pages(25, 25), 1);
    assert_eq!(total_pages(26, 25), 2);
    assert_eq!(total_pages(10, 0), 1);
}

#[test]
fn set_filter_resets_page_and_reports_change() {
    let mut state = LinksState { total: 100, page: 3, ..LinksState::default() };
    assert!(state.set_filter("  blog "));
    assert_eq!(state.filter, "blog");
    assert_eq!(state.page, 1);
    assert!(!state.set_filter("blog"));
}

#[test]
fn set_page_clamps_to_known_range() {
    let mut state = LinksState { total: 60, ..LinksState::default() };
    assert!(state.set_page(3));
    assert_eq!(state.page, 3);
    assert!(!state.set_page(9));
    assert!(state.set_page(0));
    assert_eq!(state.page, 1);
    assert!(!state.has_previous());
    assert!(state.has_next());
}

// =============================================================
// Fetch sequencing
// =============================================================

#[test]
fn finish_fetch_applies_current_generation() {
    let state = loaded(&[1, 2, 3]);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.total, 3);
    assert!(!state.loading);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = LinksState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    let newer: HistoryPage = serde_json::from_value(page(&[9], 1)).unwrap();
    assert!(state.finish_fetch(second.generation, Ok(newer)));

    let older: HistoryPage = serde_json::from_value(page(&[1, 2], 2)).unwrap();
    assert!(!state.finish_fetch(first.generation, Ok(older)));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "9");
}

#[test]
fn failed_fetch_keeps_rows_and_reports_message() {
    let mut state = loaded(&[1, 2]);
    let ticket = state.begin_fetch();
    let err = ApiError::from_status(500, &serde_json::json!({ "error": "Database unavailable" }));
    state.finish_fetch(ticket.generation, Err(err));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    assert!(!state.loading);
}

#[test]
fn failed_fetch_without_message_uses_default() {
    let mut state = LinksState::default();
    let ticket = state.begin_fetch();
    state.finish_fetch(ticket.generation, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.error.as_deref(), Some("Failed to load your links"));
}

// =============================================================
// Row actions
// =============================================================

#[test]
fn delete_issues_delete_then_refreshes_with_one_fewer_row() {
    let mut state = loaded(&[1, 2, 3]);
    let api = client(
        FakeTransport::default()
            .respond(204, serde_json::Value::Null)
            .respond(200, page(&[1, 3], 2)),
    );

    let ticket = state.begin_fetch();
    let result = block_on(delete_and_reload(&api, "2", &ticket.query));
    state.finish_fetch(ticket.generation, result);

    assert_eq!(
        api.transport().calls(),
        vec![(Method::Delete, "/urls/2".to_owned()), (Method::Get, "/history".to_owned())]
    );
    assert_eq!(state.items.len(), 2);
    assert!(state.items.iter().all(|l| l.id != "2"));
}

#[test]
fn deleting_last_row_of_last_page_steps_back_a_page() {
    let mut state = LinksState { total: 26, ..LinksState::default() };
    assert!(state.set_page(2));
    let api = client(
        FakeTransport::default()
            .respond(204, serde_json::Value::Null)
            .respond(200, serde_json::json!({ "urls": [], "page": 2, "total": 25 })),
    );

    let ticket = state.begin_fetch();
    let result = block_on(delete_and_reload(&api, "26", &ticket.query));
    assert!(state.finish_fetch(ticket.generation, result));
    assert!(state.clamp_past_end());

    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages(), 1);
    assert!(!state.has_next());
    assert_eq!(state.begin_fetch().query.page, 1);
}

#[test]
fn empty_results_within_range_do_not_step_back() {
    let mut state = loaded(&[]);
    assert!(!state.clamp_past_end());
    assert_eq!(state.page, 1);

    let mut state = loaded(&[1, 2]);
    assert!(!state.clamp_past_end());
}

#[test]
fn failed_delete_skips_refresh() {
    let api = client(FakeTransport::default().respond(403, serde_json::json!({ "detail": "Not your link" })));
    let query = LinksState::default().query();
    let err = block_on(delete_and_reload(&api, "2", &query)).unwrap_err();
    assert_eq!(err.user_message("Delete failed"), "Not your link");
    assert_eq!(api.transport().calls().len(), 1);
}

// =============================================================
// Stats modal
// =============================================================

#[test]
fn stats_view_loads_for_requested_link() {
    let mut view = StatsView::open("7");
    assert!(view.is_open());
    let stats = ClickStats { clicks: 4, unique_visitors: 3, last_click: None };
    assert!(view.finish("7", Ok(stats.clone())));
    assert_eq!(view, StatsView::Loaded { link_id: "7".to_owned(), stats });
}

#[test]
fn stats_view_ignores_results_for_other_links() {
    let mut view = StatsView::open("8");
    let stats = ClickStats { clicks: 1, unique_visitors: 1, last_click: None };
    assert!(!view.finish("7", Ok(stats)));
    assert_eq!(view, StatsView::open("8"));

    let mut closed = StatsView::Closed;
    assert!(!closed.finish("8", Err(ApiError::Unavailable)));
}

#[test]
fn stats_view_reports_failure() {
    let mut view = StatsView::open("7");
    view.finish("7", Err(ApiError::Network("offline".to_owned())));
    assert_eq!(
        view,
        StatsView::Failed { link_id: "7".to_owned(), message: "Failed to load stats".to_owned() }
    );
}

use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_decodes_mode_as_access_level() {
    let identity: Identity = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "ana@example.com",
        "mode": "business",
        "active": true
    }))
    .unwrap();
    assert_eq!(identity.id, "u-1");
    assert_eq!(identity.access_level, AccessLevel::Business);
    assert!(identity.active);
}

#[test]
fn identity_accepts_integer_id_and_defaults_active() {
    let identity: Identity = serde_json::from_value(serde_json::json!({
        "id": 42,
        "email": "ana@example.com",
        "mode": "admin"
    }))
    .unwrap();
    assert_eq!(identity.id, "42");
    assert!(identity.active);
    assert!(identity.access_level.is_admin());
}

#[test]
fn identity_rejects_unknown_access_level() {
    let result = serde_json::from_value::<Identity>(serde_json::json!({
        "id": 1,
        "email": "ana@example.com",
        "mode": "platinum"
    }));
    assert!(result.is_err());
}

#[test]
fn identity_rejects_missing_email() {
    let result = serde_json::from_value::<Identity>(serde_json::json!({ "id": 1, "mode": "free" }));
    assert!(result.is_err());
}

#[test]
fn access_level_badge_is_uppercase() {
    assert_eq!(AccessLevel::Enterprise.badge(), "ENTERPRISE");
    assert!(!AccessLevel::User.is_admin());
}

// =============================================================
// Links + stats
// =============================================================

#[test]
fn history_page_decodes_links() {
    let page: HistoryPage = serde_json::from_value(serde_json::json!({
        "urls": [{
            "id": 7,
            "source_url": "https://example.com/a/very/long/path",
            "short_url": "https://snip.zo/abc",
            "created_at": "2024-03-01T10:20:30Z",
            "clicks": 12
        }],
        "page": 2,
        "total": 26
    }))
    .unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.total, 26);
    assert_eq!(page.urls[0].id, "7");
    assert_eq!(page.urls[0].clicks, 12);
}

#[test]
fn history_page_defaults_missing_fields() {
    let page: HistoryPage = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.urls.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total, 0);
}

#[test]
fn click_stats_accepts_null_last_click_and_float_counts() {
    let stats: ClickStats = serde_json::from_value(serde_json::json!({
        "clicks": 3.0,
        "unique_visitors": 2,
        "last_click": null
    }))
    .unwrap();
    assert_eq!(stats.clicks, 3);
    assert_eq!(stats.unique_visitors, 2);
    assert_eq!(stats.last_click, None);
}

#[test]
fn click_stats_rejects_negative_counts() {
    let result = serde_json::from_value::<ClickStats>(serde_json::json!({ "clicks": -1 }));
    assert!(result.is_err());
}

#[test]
fn history_query_pairs_include_all_parameters() {
    let query = HistoryQuery { page: 3, size: 25, filter: "docs".to_owned() };
    assert_eq!(
        query.to_pairs(),
        vec![("page", "3".to_owned()), ("size", "25".to_owned()), ("filter", "docs".to_owned())]
    );
}

// =============================================================
// Admin + shorten
// =============================================================

#[test]
fn admin_user_list_decodes_rows() {
    let list: AdminUserList = serde_json::from_value(serde_json::json!({
        "users": [{
            "id": "u-9",
            "email": "bo@example.com",
            "mode": "free",
            "registered": "2023-12-24T08:00:00Z",
            "active": false
        }]
    }))
    .unwrap();
    assert_eq!(list.users.len(), 1);
    assert!(!list.users[0].active);
}

#[test]
fn admin_user_without_active_flag_reads_as_inactive() {
    let list: AdminUserList = serde_json::from_value(serde_json::json!({
        "users": [
            { "id": 1, "email": "a@b.co", "mode": "user", "registered": "2024-01-02T03:04:05Z" },
            { "id": 2, "email": "c@d.co", "mode": "admin", "registered": "2024-01-02T03:04:05Z", "active": true }
        ]
    }))
    .unwrap();
    assert_eq!(list.users.len(), 2);
    assert_eq!(list.users[0].id, "1");
    assert!(!list.users[0].active);
    assert!(list.users[1].active);
}

#[test]
fn shorten_response_accepts_camel_and_snake_case() {
    let camel: ShortenResponse =
        serde_json::from_value(serde_json::json!({ "shortUrl": "https://snip.zo/x" })).unwrap();
    let snake: ShortenResponse =
        serde_json::from_value(serde_json::json!({ "short_url": "https://snip.zo/y" })).unwrap();
    assert_eq!(camel.short_url, "https://snip.zo/x");
    assert_eq!(snake.short_url, "https://snip.zo/y");
}

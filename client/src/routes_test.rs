use super::*;

#[test]
fn paths_round_trip_through_from_path() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_query_and_trailing_slash() {
    assert_eq!(AppRoute::from_path("/reset?token=abc"), Some(AppRoute::Reset));
    assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
    assert_eq!(AppRoute::from_path("/forgot"), None);
}

#[test]
fn segments_have_no_leading_slash() {
    assert_eq!(AppRoute::Home.segment(), "");
    assert_eq!(AppRoute::Admin.segment(), "admin");
}

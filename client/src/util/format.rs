//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO 8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Anything that does not look like an ISO date-time is shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once(['T', ' ']) else {
        return raw.to_owned();
    };
    let Some(hours_minutes) = time.get(..5) else {
        return raw.to_owned();
    };
    let looks_iso = date.len() == 10
        && date.as_bytes().get(4) == Some(&b'-')
        && date.as_bytes().get(7) == Some(&b'-')
        && hours_minutes.as_bytes().get(2) == Some(&b':');
    if !looks_iso {
        return raw.to_owned();
    }
    format!("{date} {hours_minutes}")
}

/// Last-click cell: formatted timestamp or "Never".
pub fn format_last_click(last_click: Option<&str>) -> String {
    match last_click {
        Some(ts) if !ts.trim().is_empty() => format_timestamp(ts),
        _ => "Never".to_owned(),
    }
}

/// Price label for a pricing card, e.g. `$10`.
pub fn format_price(dollars: u32) -> String {
    format!("${dollars}")
}

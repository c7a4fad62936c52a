//! Link-history state for the user dashboard.
//!
//! DESIGN
//! ======
//! The dashboard caches exactly one page of links per fetch. Row actions call
//! the mutating endpoint and then re-fetch; there is no optimistic update and
//! no local reconciliation. Fetches are stamped with a generation so an older
//! response landing late is discarded.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use super::generation::Generation;
use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::{ClickStats, HistoryPage, HistoryQuery, ShortLink};

/// Rows per page unless the user picks another size.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

const LOAD_FAILED: &str = "Failed to load your links";

/// A fetch that has been started and may finish later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: HistoryQuery,
}

/// One page of the user's links plus paging and filter inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinksState {
    pub items: Vec<ShortLink>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub filter: String,
    pub loading: bool,
    pub error: Option<String>,
    generation: Generation,
}

impl Default for LinksState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            filter: String::new(),
            loading: true,
            error: None,
            generation: Generation::default(),
        }
    }
}

impl LinksState {
    pub fn query(&self) -> HistoryQuery {
        HistoryQuery { page: self.page, size: self.page_size, filter: self.filter.clone() }
    }

    /// Replace the search filter. A new filter starts again from page 1.
    ///
    /// Returns `true` if a re-fetch is needed.
    pub fn set_filter(&mut self, filter: &str) -> bool {
        let filter = filter.trim();
        if self.filter == filter {
            return false;
        }
        filter.clone_into(&mut self.filter);
        self.page = 1;
        true
    }

    /// Jump to `page`, clamped to the known range. Returns `true` if it moved.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages());
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        FetchTicket { generation: self.generation.advance(), query: self.query() }
    }

    /// Store a fetch result unless a newer fetch has started since.
    ///
    /// Returns `true` if the result was applied.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<HistoryPage, ApiError>) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.urls;
                self.page = page.page.max(1);
                self.total = page.total;
            }
            Err(e) => self.error = Some(e.user_message(LOAD_FAILED)),
        }
        true
    }

    /// Move back to the last page when the current one came back empty because
    /// rows disappeared, e.g. after deleting the only link on the last page.
    ///
    /// Returns `true` if the page changed and a re-fetch is needed.
    pub fn clamp_past_end(&mut self) -> bool {
        let last = self.total_pages();
        if !self.items.is_empty() || self.total == 0 || self.page <= last {
            return false;
        }
        self.page = last;
        true
    }
}

/// Number of pages needed for `total` rows; at least one.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Delete a link, then reload the page described by `query`.
///
/// # Errors
///
/// Returns the delete failure (without reloading) or the reload failure.
pub async fn delete_and_reload<T: Transport>(
    api: &ApiClient<T>,
    link_id: &str,
    query: &HistoryQuery,
) -> Result<HistoryPage, ApiError> {
    api.delete_link(link_id).await?;
    log::info!("deleted link {link_id}");
    api.history(query).await
}

/// Click-analytics modal for one link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatsView {
    #[default]
    Closed,
    Loading { link_id: String },
    Loaded { link_id: String, stats: ClickStats },
    Failed { link_id: String, message: String },
}

impl StatsView {
    pub fn open(link_id: &str) -> Self {
        Self::Loading { link_id: link_id.to_owned() }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Store stats for `link_id` if the modal is still waiting on that link.
    pub fn finish(&mut self, link_id: &str, result: Result<ClickStats, ApiError>) -> bool {
        if !matches!(self, Self::Loading { link_id: waiting } if waiting == link_id) {
            return false;
        }
        let link_id = link_id.to_owned();
        *self = match result {
            Ok(stats) => Self::Loaded { link_id, stats },
            Err(e) => Self::Failed { link_id, message: e.user_message("Failed to load stats") },
        };
        true
    }
}

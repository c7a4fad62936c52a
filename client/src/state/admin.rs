//! Admin user-management state.
//!
//! DESIGN
//! ======
//! Mirrors `links`: one cached list per fetch, mutate-then-refetch row
//! actions, and generation stamps so only the latest search writes back.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::generation::Generation;
use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::{AdminUser, ShortLink};

const LOAD_FAILED: &str = "Failed to load users";

/// The admin user table plus the details modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminState {
    pub users: Vec<AdminUser>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub details: UserDetails,
    generation: Generation,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            details: UserDetails::default(),
            generation: Generation::default(),
        }
    }
}

impl AdminState {
    /// Returns `true` if the search changed and a re-fetch is needed.
    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if self.search == search {
            return false;
        }
        search.clone_into(&mut self.search);
        true
    }

    /// Start a fetch; returns its generation and the search to send.
    pub fn begin_fetch(&mut self) -> (u64, String) {
        self.loading = true;
        self.error = None;
        (self.generation.advance(), self.search.clone())
    }

    /// Store a fetch result unless a newer fetch has started since.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<AdminUser>, ApiError>) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(users) => self.users = users,
            Err(e) => self.error = Some(e.user_message(LOAD_FAILED)),
        }
        true
    }
}

/// Flip a user's active flag, then reload the list for `search`.
///
/// # Errors
///
/// Returns the update failure (without reloading) or the reload failure.
pub async fn toggle_active_and_reload<T: Transport>(
    api: &ApiClient<T>,
    user: &AdminUser,
    search: &str,
) -> Result<Vec<AdminUser>, ApiError> {
    let active = !user.active;
    api.set_user_active(&user.id, active).await?;
    log::info!("set user {} active={active}", user.email);
    api.admin_users(search).await
}

/// Details modal: the selected user and their links once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UserDetails {
    #[default]
    Closed,
    Loading(AdminUser),
    Loaded(AdminUser, Vec<ShortLink>),
    Failed(AdminUser, String),
}

impl UserDetails {
    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Self::Closed => None,
            Self::Loading(user) | Self::Loaded(user, _) | Self::Failed(user, _) => Some(user),
        }
    }

    /// Store the link list if the modal is still loading `user_id`.
    pub fn finish(&mut self, user_id: &str, result: Result<Vec<ShortLink>, ApiError>) -> bool {
        let Self::Loading(user) = self else {
            return false;
        };
        if user.id != user_id {
            return false;
        }
        let user = user.clone();
        *self = match result {
            Ok(urls) => Self::Loaded(user, urls),
            Err(e) => Self::Failed(user, e.user_message("Failed to load user links")),
        };
        true
    }
}

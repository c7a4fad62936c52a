//! Client-side route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every navigable screen of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Register,
    Login,
    Reset,
    Profile,
    Dashboard,
    Admin,
}

impl AppRoute {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Register,
        Self::Login,
        Self::Reset,
        Self::Profile,
        Self::Dashboard,
        Self::Admin,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Reset => "/reset",
            Self::Profile => "/profile",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
        }
    }

    /// Path segment as registered with the router (no leading slash).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

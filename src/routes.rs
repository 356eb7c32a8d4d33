//! Static route table.
//!
//! Paths are compared segment by segment; empty segments (leading,
//! trailing or doubled slashes) are ignored.

use crate::config::RoutesConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/clicker`
    Clicker,
    /// `/login/*`
    Login,
    /// `/registration/*`
    Registration,
    /// `/posts`
    Posts,
    /// `/posts/:id`
    Post { id: u64 },
    /// `/users`, behind the auth gate.
    Users,
    /// Anything else.
    Redirect { to: String },
}

impl Route {
    /// Whether the page must be rendered through the auth gate.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Users)
    }
}

pub struct RouteTable {
    fallback_path: String,
}

impl RouteTable {
    pub fn new(config: &RoutesConfig) -> Self {
        Self {
            fallback_path: config.fallback_path.clone(),
        }
    }

    pub fn resolve(&self, path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["clicker"] => Route::Clicker,
            ["login", ..] => Route::Login,
            ["registration", ..] => Route::Registration,
            ["posts"] => Route::Posts,
            ["posts", id] => match id.parse() {
                Ok(id) => Route::Post { id },
                Err(_) => self.fallback(),
            },
            ["users"] => Route::Users,
            _ => self.fallback(),
        }
    }

    fn fallback(&self) -> Route {
        Route::Redirect {
            to: self.fallback_path.clone(),
        }
    }
}

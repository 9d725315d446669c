//! Router Module
//!
//! Static route table and the navigation guard that fronts it.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::notify::{Notify, Severity};
use crate::session::SessionHandle;

/// Where denied navigations are sent
pub const AUTH_PATH: &str = "/auth";

/// Static description of a navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Route table for the app, defined once at startup
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        name: "home",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/auth",
        name: "auth",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/user",
        name: "user",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/user/edit",
        name: "user-edit",
        requires_auth: true,
    },
    RouteDescriptor {
        path: "/match",
        name: "match-list",
        requires_auth: false,
    },
    RouteDescriptor {
        path: "/match/:id",
        name: "match-detail",
        requires_auth: false,
    },
];

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allow {
        route: RouteDescriptor,
        params: HashMap<String, String>,
    },
    Redirect {
        to: &'static str,
    },
    NotFound,
}

/// Matches paths against the route table, gated by the session
pub struct Router {
    routes: &'static [RouteDescriptor],
    notifier: Arc<dyn Notify>,
}

impl Router {
    pub fn new(notifier: Arc<dyn Notify>) -> Self {
        Self {
            routes: ROUTES,
            notifier,
        }
    }

    /// Resolve a navigation attempt.
    ///
    /// Auth-required routes redirect to `/auth` with a single error toast
    /// when the session is signed out; everything else passes through.
    pub fn resolve(&self, session: &SessionHandle, to: &str) -> Navigation {
        let Some((route, params)) = self.match_path(to) else {
            debug!("No route matches: {}", to);
            return Navigation::NotFound;
        };

        if route.requires_auth && !session.is_authenticated() {
            info!("Navigation to {} denied: not signed in", to);
            self.notifier
                .notify(Severity::Error, "未登录", "请先登录以访问该页面");
            return Navigation::Redirect { to: AUTH_PATH };
        }

        debug!("Navigating to {} ({})", to, route.name);
        Navigation::Allow {
            route: *route,
            params,
        }
    }

    fn match_path(&self, path: &str) -> Option<(&RouteDescriptor, HashMap<String, String>)> {
        self.routes
            .iter()
            .find_map(|route| match_segments(route.path, path).map(|params| (route, params)))
    }
}

/// Segment-wise match of a concrete path against a route pattern.
/// `:name` segments capture the concrete segment into the params map.
fn match_segments(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}

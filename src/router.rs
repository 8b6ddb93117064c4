//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never switch on their own; they ask [`Router::navigate`], which
//! consults the session's authentication flag before every move. Guest-only
//! and auth-only routes bounce to each other, and `/` always lands on login
//! (and from there on the card screen if already signed in).

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;

/// Anything the guard can ask whether the user is signed in.
pub trait AuthStatus {
    fn is_authenticated(&self) -> bool;
}

impl AuthStatus for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`, which only ever redirects.
    Root,
    Login,
    Card,
    Detail,
}

/// Access rule attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Root, Route::Login, Route::Card, Route::Detail];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Card => "/card",
            Self::Detail => "/detail",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Login => "Login",
            Self::Card => "Card",
            Self::Detail => "Detail",
        }
    }

    /// Look up a route by path. Trailing slashes are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    #[must_use]
    pub fn meta(self) -> RouteMeta {
        match self {
            Self::Root => RouteMeta::default(),
            Self::Login => RouteMeta { requires_auth: false, requires_guest: true },
            Self::Card | Self::Detail => RouteMeta { requires_auth: true, requires_guest: false },
        }
    }

    /// Unconditional redirect configured on the route itself.
    #[must_use]
    pub fn redirect(self) -> Option<Route> {
        match self {
            Self::Root => Some(Self::Login),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches {0:?}")]
    NotFound(String),
}

/// Outcome of running the guard on a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(Route),
}

/// Guard decision for entering `to`.
#[must_use]
pub fn guard(to: Route, authenticated: bool) -> Guard {
    let meta = to.meta();
    if meta.requires_auth && !authenticated {
        Guard::Redirect(Route::Login)
    } else if meta.requires_guest && authenticated {
        Guard::Redirect(Route::Card)
    } else {
        Guard::Allow
    }
}

/// Follow route redirects and guard redirects until a route is allowed.
///
/// The route table is small and every chain ends at `Login` or `Card`, so
/// the loop is bounded by the number of routes.
#[must_use]
pub fn resolve(to: Route, authenticated: bool) -> Route {
    let mut target = to;
    for _ in 0..=Route::ALL.len() {
        if let Some(next) = target.redirect() {
            target = next;
            continue;
        }
        match guard(target, authenticated) {
            Guard::Allow => return target,
            Guard::Redirect(next) => target = next,
        }
    }
    target
}

/// Tracks the active route. Starts on `/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Default for Router {
    fn default() -> Self {
        Self { current: Route::Login }
    }
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to `path`, applying redirects and the guard. Returns the route
    /// actually entered.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] for a path outside the route table; the
    /// current route is unchanged.
    pub fn navigate(&mut self, path: &str, session: &impl AuthStatus) -> Result<Route, RouteError> {
        let to = Route::from_path(path).ok_or_else(|| RouteError::NotFound(path.to_owned()))?;
        Ok(self.push(to, session))
    }

    /// Navigate to a known route.
    pub fn push(&mut self, to: Route, session: &impl AuthStatus) -> Route {
        let landed = resolve(to, session.is_authenticated());
        if landed != to {
            tracing::debug!(from = %self.current, to = %to, landed = %landed, "navigation redirected");
        }
        self.current = landed;
        landed
    }
}

//! Client-side routes and navigation.

use std::fmt;
use std::sync::Mutex;

/// A client-side route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// The sign-in page, which is also the root.
    SignIn,
    /// The sign-up page.
    #[default]
    SignUp,
}

impl Route {
    /// Path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::SignUp => "/signup",
        }
    }

    /// Resolves a path to a route.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::SignIn),
            "/signup" => Some(Self::SignUp),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Performs client-side navigation. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// A navigator that records pushed routes in memory.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    pushed: Mutex<Vec<Route>>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route pushed so far, oldest first.
    pub fn pushed(&self) -> Vec<Route> {
        self.pushed
            .lock()
            .map(|pushed| pushed.clone())
            .unwrap_or_default()
    }

    /// The route currently shown. The sign-up page until something is pushed.
    pub fn current(&self) -> Route {
        self.pushed().last().copied().unwrap_or_default()
    }
}

impl Navigator for NavigationHistory {
    fn navigate(&self, route: Route) {
        log::debug!("navigate to {}", route);
        if let Ok(mut pushed) = self.pushed.lock() {
            pushed.push(route);
        }
    }
}

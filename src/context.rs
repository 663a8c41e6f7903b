//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::guard::{self, Route};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Navigate through the route guard; `/admin` without a stored
    /// credential lands on the login page instead
    pub fn navigate(&self, requested: Route) {
        let resolved = guard::resolve(requested, guard::credential_present());
        self.set_route.set(resolved);
    }

    /// Jump without consulting the guard (used for forced redirects
    /// after a failed session verification)
    pub fn redirect(&self, route: Route) {
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

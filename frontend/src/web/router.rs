//! Router service - core engine
//!
//! Wraps the web_sys History API. Every touch of window.history lives in
//! this module. Navigation runs as "listen -> record -> load".

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteHistory};

/// Current browser path
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a History entry (internal helper)
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Replace the current History entry (internal helper)
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Step the browser one entry back; the popstate listener picks it up.
fn browser_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Router service
///
/// Holds the current route as a signal and mirrors the session history
/// so `back` knows whether an earlier in-app page exists.
#[derive(Clone, Copy)]
pub struct RouterService {
    /// Current route (read)
    current_route: ReadSignal<AppRoute>,
    /// Current route (write)
    set_route: WriteSignal<AppRoute>,
    history: StoredValue<RouteHistory>,
}

impl RouterService {
    fn new() -> Self {
        // Initial route comes from the URL
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route.clone());

        Self {
            current_route,
            set_route,
            history: StoredValue::new(RouteHistory::new(initial_route)),
        }
    }

    /// Current route signal
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, adding a history entry.
    pub fn navigate(&self, path: &str) {
        self.navigate_to(AppRoute::from_path(path));
    }

    /// Navigate to a route, adding a history entry.
    pub fn navigate_to(&self, target_route: AppRoute) {
        log!("[Router] {} -> {}", self.current_route.get_untracked(), target_route);
        push_history_state(&target_route.to_path());
        self.history.update_value(|h| h.push(target_route.clone()));
        self.set_route.set(target_route);
    }

    /// Go to the previous page.
    ///
    /// With no earlier in-app entry, the current route's parent replaces it.
    pub fn back(&self) {
        if self.history.with_value(RouteHistory::can_go_back) {
            browser_back();
            return;
        }

        let parent = self.current_route.get_untracked().parent();
        log!("[Router] No previous entry. Falling back to {}.", parent);
        replace_history_state(&parent.to_path());
        self.history.update_value(|h| h.replace(parent.clone()));
        self.set_route.set(parent);
    }

    /// Listen for the browser back/forward buttons
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let history = self.history;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            history.update_value(|h| h.sync_to(target_route.clone()));
            set_route.set(target_route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive
        closure.forget();
    }

    /// Rewrites "/" and other aliases to the canonical path of the route.
    fn canonicalize_location(&self) {
        let route = self.current_route.get_untracked();
        if route != AppRoute::NotFound && current_path() != route.to_path() {
            replace_history_state(&route.to_path());
        }
    }
}

/// Provide the router service via Context and initialize it
fn provide_router() -> RouterService {
    let router = RouterService::new();

    router.canonicalize_location();
    router.init_popstate_listener();

    provide_context(router);
    router
}

/// Router service from Context
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Root router component
///
/// Provides the routing context; use it at the root of the App.
#[component]
pub fn Router(
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// Router outlet
///
/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matcher: takes the current route and returns its view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

//! Bairros frontend
//!
//! Context-driven layout:
//! - `web::route`: route definitions and the navigation history model
//! - `web::router`: router service (History API engine)
//! - `api`: backend client, shared through context
//! - `components`: pages and widgets

mod api;
mod config;
mod components {
    mod add_comment_dialog;
    pub mod city_selection;
    mod comment_list;
    mod common;
    mod icons;
    pub mod neighborhood_details;
    pub mod neighborhood_list;
}

use crate::api::BairrosApi;
use crate::components::city_selection::CitySelectionPage;
use crate::components::neighborhood_details::NeighborhoodDetailsPage;
use crate::components::neighborhood_list::NeighborhoodListPage;
use crate::config::AppConfig;

use leptos::prelude::*;

// Thin wrappers over native browser APIs
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;

    pub use http::{HttpError, HttpRequest};
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// Route matcher
///
/// Maps each AppRoute to its page view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Cities => view! { <CitySelectionPage /> }.into_any(),
        AppRoute::Neighborhoods { city_id } => {
            view! { <NeighborhoodListPage city_id=city_id /> }.into_any()
        }
        AppRoute::NeighborhoodDetails { neighborhood_id } => {
            view! { <NeighborhoodDetailsPage neighborhood_id=neighborhood_id /> }.into_any()
        }
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <button class="btn btn-primary mt-6" on:click=move |_| router.navigate("/cities")>
                    "Go to cities"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    provide_context(BairrosApi::from_config(&config));

    view! {
        <div class="min-h-screen bg-base-200">
            <Router>
                <RouterOutlet matcher=route_matcher />
            </Router>
        </div>
    }
}

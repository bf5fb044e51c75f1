use crate::api::use_api;
use crate::components::common::{BackButton, FallbackNotice, LoadingIndicator};
use crate::components::icons::MapPin;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use bairros_shared::fallback::{city_display_name, resolve_neighborhoods};
use bairros_shared::{Neighborhood, Sourced};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NeighborhoodListPage(city_id: i64) -> impl IntoView {
    let api = use_api();
    let router = use_router();
    let city_name = city_display_name(city_id);

    let (neighborhoods, set_neighborhoods) = signal(Option::<Sourced<Vec<Neighborhood>>>::None);

    spawn_local(async move {
        let resolved = resolve_neighborhoods(city_id, api.list_neighborhoods(city_id).await);
        if resolved.source.is_fallback() {
            log!("[Neighborhoods] Using sample neighborhoods for city {}", city_id);
        }
        set_neighborhoods.set(Some(resolved));
    });

    let notify =
        move || neighborhoods.with(|n| n.as_ref().is_some_and(|n| n.source.should_notify()));
    let list = move || {
        neighborhoods.with(|n| n.as_ref().map(|n| n.data.clone()).unwrap_or_default())
    };
    let is_empty = move || neighborhoods.with(|n| n.as_ref().is_some_and(|n| n.data.is_empty()));

    view! {
        <div class="container mx-auto py-8 px-4">
            <BackButton
                label="Back to cities"
                on_back=move |_| router.navigate_to(AppRoute::Cities)
            />

            <div class="card w-full max-w-4xl mx-auto bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl font-bold justify-center">
                        "Neighborhoods of " {city_name}
                    </h2>
                    <p class="text-center text-base-content/70">
                        "Select a neighborhood to see what people say about it"
                    </p>

                    <Show
                        when=move || neighborhoods.with(Option::is_some)
                        fallback=|| view! { <LoadingIndicator label="Loading neighborhoods..." /> }
                    >
                        <Show when=notify>
                            <FallbackNotice />
                        </Show>
                        <Show
                            when=move || !is_empty()
                            fallback=|| view! {
                                <div class="text-center py-8 text-base-content/50">
                                    "No neighborhoods found for this city."
                                </div>
                            }
                        >
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-4">
                                <For
                                    each=list
                                    key=|n| n.id
                                    children=move |neighborhood| {
                                        let neighborhood_id = neighborhood.id;
                                        view! {
                                            <button
                                                class="btn btn-outline h-20 text-lg font-medium gap-2"
                                                on:click=move |_| router.navigate_to(
                                                    AppRoute::NeighborhoodDetails { neighborhood_id },
                                                )
                                            >
                                                <MapPin attr:class="h-5 w-5 opacity-60" />
                                                {neighborhood.name}
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}

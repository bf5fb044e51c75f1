use crate::api::use_api;
use crate::components::common::{FallbackNotice, LoadingIndicator};
use crate::components::icons::Building;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use bairros_shared::fallback::resolve_cities;
use bairros_shared::{City, Sourced};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CitySelectionPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    // None while the request is in flight
    let (cities, set_cities) = signal(Option::<Sourced<Vec<City>>>::None);

    spawn_local(async move {
        let resolved = resolve_cities(api.list_cities().await);
        if resolved.source.is_fallback() {
            log!("[Cities] Using sample cities ({:?})", resolved.source);
        }
        set_cities.set(Some(resolved));
    });

    let notify = move || cities.with(|c| c.as_ref().is_some_and(|c| c.source.should_notify()));
    let city_list = move || cities.with(|c| c.as_ref().map(|c| c.data.clone()).unwrap_or_default());

    view! {
        <div class="container mx-auto py-8 px-4">
            <div class="card w-full max-w-4xl mx-auto bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title text-2xl font-bold justify-center">"Select a City"</h2>
                    <p class="text-center text-base-content/70">
                        "Choose a city to see its neighborhoods"
                    </p>

                    <Show
                        when=move || cities.with(Option::is_some)
                        fallback=|| view! { <LoadingIndicator label="Loading cities..." /> }
                    >
                        <Show when=notify>
                            <FallbackNotice />
                        </Show>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-4">
                            <For
                                each=city_list
                                key=|city| city.id
                                children=move |city| {
                                    let city_id = city.id;
                                    view! {
                                        <button
                                            class="btn btn-outline h-24 text-lg font-medium gap-2"
                                            on:click=move |_| router.navigate_to(AppRoute::Neighborhoods { city_id })
                                        >
                                            <Building attr:class="h-5 w-5 opacity-60" />
                                            {city.name}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

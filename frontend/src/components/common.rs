use crate::components::icons::{ArrowLeft, Loader, TriangleAlert};
use leptos::prelude::*;

/// Spinner with a caption, shown while a page waits for its fetch.
#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center py-12 gap-2">
            <Loader attr:class="h-8 w-8 animate-spin text-primary" />
            <span>{label}</span>
        </div>
    }
}

/// Shown above sample data when the backend could not be reached.
#[component]
pub fn FallbackNotice() -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-warning text-sm py-2 mb-4">
            <TriangleAlert attr:class="h-5 w-5" />
            <span>"Couldn't reach the server, showing sample data. Please try again later."</span>
        </div>
    }
}

#[component]
pub fn BackButton(#[prop(into)] label: String, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    view! {
        <button class="btn btn-ghost mb-4 gap-2" on:click=move |_| on_back.run(())>
            <ArrowLeft attr:class="h-4 w-4" /> {label}
        </button>
    }
}

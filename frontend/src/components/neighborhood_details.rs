use crate::api::use_api;
use crate::components::add_comment_dialog::AddCommentDialog;
use crate::components::comment_list::CommentList;
use crate::components::common::{BackButton, LoadingIndicator};
use crate::components::icons::Plus;
use crate::web::router::use_router;
use bairros_shared::fallback::resolve_comments;
use bairros_shared::{Category, CommentBoard, NeighborhoodProfile};
use chrono::Utc;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NeighborhoodDetailsPage(neighborhood_id: i64) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    // Neighborhood records are not served by the backend yet
    let profile = NeighborhoodProfile::synthesize(neighborhood_id);

    let board = RwSignal::new(CommentBoard::default());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        let result = api.list_comments(neighborhood_id).await;
        let resolved = resolve_comments(result, &mut rand::thread_rng(), Utc::now());

        if resolved.source.is_fallback() {
            log!("[Details] Using sample comments for neighborhood {}", neighborhood_id);
        }
        let unmatched = resolved.data.unmatched().len();
        if unmatched > 0 {
            warn!(
                "[Details] {} comment(s) of neighborhood {} have an unknown category and are hidden",
                unmatched, neighborhood_id
            );
        }

        board.set(CommentBoard::new(resolved.data));
        set_loading.set(false);
    });

    let active = Signal::derive(move || board.with(CommentBoard::active));
    let active_comments = Signal::derive(move || board.with(|b| b.active_comments().to_vec()));
    let dialog_open = Signal::derive(move || board.with(CommentBoard::is_dialog_open));
    let dialog_category = Signal::derive(move || {
        board.with(|b| b.draft().map(|d| d.category).unwrap_or_else(|| b.active()))
    });
    let draft_text = Signal::derive(move || {
        board.with(|b| b.draft().map(|d| d.text.clone()).unwrap_or_default())
    });

    let handle_submit = move |_| {
        board.update(|b| match b.submit(Utc::now()) {
            Ok(comment) => log!("[Details] Added comment {} to {}", comment.id, comment.category),
            Err(e) => log!("[Details] Comment not added: {}", e),
        });
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingIndicator label="Loading neighborhood..." /> }
        >
            <div class="container mx-auto py-8 px-4">
                <BackButton label="Back" on_back=move |_| router.back() />

                <div class="card w-full max-w-4xl mx-auto bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title text-2xl font-bold justify-center">
                            {profile.name.clone()}
                        </h2>
                        <p class="text-center text-base-content/70">{profile.city_name.clone()}</p>

                        <div role="tablist" class="tabs tabs-boxed grid grid-cols-2 md:grid-cols-5 lg:grid-cols-10 mb-8 mt-4">
                            {Category::ALL
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <button
                                            role="tab"
                                            class=move || {
                                                if active.get() == category {
                                                    "tab tab-active text-xs md:text-sm"
                                                } else {
                                                    "tab text-xs md:text-sm"
                                                }
                                            }
                                            on:click=move |_| board.update(|b| b.select(category))
                                        >
                                            {category.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex justify-between items-center mb-4">
                            <h3 class="text-lg font-medium">{move || active.get().label()}</h3>
                            <button
                                class="btn btn-sm btn-outline gap-1"
                                on:click=move |_| board.update(CommentBoard::open_dialog)
                            >
                                <Plus attr:class="h-4 w-4" /> "Add"
                            </button>
                        </div>

                        <CommentList comments=active_comments />

                        <AddCommentDialog
                            open=dialog_open
                            category=dialog_category
                            text=draft_text
                            on_input=move |text: String| board.update(|b| b.set_draft_text(text))
                            on_submit=handle_submit
                            on_close=move |_| board.update(CommentBoard::close_dialog)
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}

use bairros_shared::Comment;
use bairros_shared::date::format_day;
use chrono::Local;
use leptos::prelude::*;

#[component]
pub fn CommentList(#[prop(into)] comments: Signal<Vec<Comment>>) -> impl IntoView {
    view! {
        <Show
            when=move || comments.with(|c| !c.is_empty())
            fallback=|| view! {
                <div class="text-center py-8 text-base-content/50">
                    "No comments in this category yet. Be the first to share your experience!"
                </div>
            }
        >
            <div class="space-y-4">
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    children=|comment| view! { <CommentCard comment=comment /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn CommentCard(comment: Comment) -> impl IntoView {
    let initial = comment.user.initial().to_string();
    let name = comment.user.display_name().to_string();
    let avatar = comment.user.avatar.clone();

    view! {
        <div class="card card-bordered border-base-300">
            <div class="card-body p-4">
                <div class="flex items-start gap-4">
                    <div class="avatar placeholder">
                        <div class="bg-neutral text-neutral-content w-10 rounded-full">
                            {match avatar {
                                Some(src) => view! { <img src=src alt=name.clone() /> }.into_any(),
                                None => view! { <span>{initial}</span> }.into_any(),
                            }}
                        </div>
                    </div>
                    <div class="space-y-2">
                        <div class="flex items-center gap-2">
                            <h4 class="font-medium">{name.clone()}</h4>
                            <span class="text-xs text-base-content/50">
                                {format_day(&comment.created_at.with_timezone(&Local))}
                            </span>
                        </div>
                        <p class="text-base-content/80 whitespace-pre-line">{comment.content}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

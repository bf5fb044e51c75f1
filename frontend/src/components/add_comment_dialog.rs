use bairros_shared::Category;
use leptos::prelude::*;

/// Modal form for a new comment.
///
/// The dialog holds no state of its own: `open`, `category` and `text`
/// come from the page's comment board, and every change goes back out
/// through the callbacks.
#[component]
pub fn AddCommentDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] category: Signal<Category>,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let blank = move || text.with(|t| t.trim().is_empty());

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box sm:max-w-lg">
                <h3 class="font-bold text-lg">"Add a comment - " {move || category.get().label()}</h3>
                <p class="py-2 text-base-content/70">
                    "Share your experience of this neighborhood in the "
                    {move || category.get().label()} " category."
                </p>

                <form on:submit=submit class="space-y-4">
                    <div class="form-control">
                        <label for="comment" class="label">
                            <span class="label-text">"Your comment"</span>
                        </label>
                        <textarea
                            id="comment"
                            required
                            placeholder="Share your experience..."
                            class="textarea textarea-bordered min-h-[120px] w-full"
                            prop:value=move || text.get()
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=blank>
                            "Send"
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

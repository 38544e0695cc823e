//! AI cover generation for one book. The result stays inline; navigation
//! back to the detail view is explicit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::feedback::ErrorBanner;
use crate::components::icons::Sparkles;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ImageCreatePage(id: i64) -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (prompt, set_prompt) = signal(String::new());
    let (generating, set_generating) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (result, set_result) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if generating.get_untracked() {
            return;
        }
        let text = prompt.get_untracked().trim().to_string();
        if text.is_empty() {
            set_error.set(Some("Enter a prompt describing the cover.".to_string()));
            return;
        }

        set_generating.set(true);
        set_error.set(None);
        set_result.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.generate_cover(id, text).await {
                Ok(generated) => match generated.book_cover_url.filter(|url| !url.is_empty()) {
                    Some(url) => {
                        let _ = set_result.try_set(Some(url));
                    }
                    None => {
                        let _ = set_error.try_set(Some(
                            "The response did not include a cover URL.".to_string(),
                        ));
                    }
                },
                Err(err) => {
                    if err == ApiError::Unauthorized {
                        session.expire();
                    }
                    let _ = set_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_generating.try_set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <h1 class="card-title text-2xl gap-2">
                        <Sparkles attr:class="h-6 w-6 text-primary" />
                        "Generate a cover"
                    </h1>
                    <p class="text-sm text-base-content/70">{format!("Book #{id}")}</p>

                    <Show when=move || error.get().is_some()>
                        <ErrorBanner message=error.get().unwrap_or_default() />
                    </Show>

                    <div class="form-control">
                        <label class="label" for="prompt">
                            <span class="label-text">"Prompt *"</span>
                        </label>
                        <textarea
                            id="prompt"
                            rows="4"
                            placeholder="Describe the style or scene you want on the cover."
                            class="textarea textarea-bordered w-full"
                            prop:value=prompt
                            on:input=move |ev| {
                                set_prompt.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                        ></textarea>
                    </div>

                    <div class="form-control mt-2">
                        <button class="btn btn-primary" disabled=move || generating.get()>
                            {move || {
                                if generating.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Generating..."
                                    }
                                        .into_any()
                                } else {
                                    "Generate cover".into_any()
                                }
                            }}
                        </button>
                    </div>

                    {move || {
                        result
                            .get()
                            .map(|url| {
                                view! {
                                    <div class="space-y-3 mt-4">
                                        <div role="alert" class="alert alert-success">
                                            <span>"AI cover generated."</span>
                                        </div>
                                        <div class="flex justify-center">
                                            <img
                                                src=url
                                                alt="generated cover"
                                                class="max-h-80 rounded-lg shadow"
                                            />
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <div class="form-control mt-2">
                        <Link to=AppRoute::BookDetail(id) class="btn btn-outline btn-sm">
                            "Back to book"
                        </Link>
                    </div>
                </form>
            </div>
        </div>
    }
}

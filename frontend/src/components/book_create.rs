//! Book registration. On success the flow continues straight into AI cover
//! generation for the new id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::book_form::{BookFormFields, BookFormState};
use crate::components::feedback::ErrorBanner;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn BookCreatePage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let form = BookFormState::new();
    let (submitting, set_submitting) = signal(false);
    let (banner, set_banner) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        // Validation failures annotate the fields; nothing goes on the wire.
        if !form.validate() {
            return;
        }

        set_submitting.set(true);
        set_banner.set(None);

        let api = api.clone();
        let payload = form.to_payload();
        spawn_local(async move {
            match api.create_book(&payload).await {
                Ok(created) => match created.id {
                    Some(id) => {
                        router.navigate(AppRoute::GenerateCover(id));
                        return;
                    }
                    None => {
                        let _ = set_banner.try_set(Some(
                            "The book was saved, but the server did not return its id."
                                .to_string(),
                        ));
                    }
                },
                Err(error) => {
                    if error == ApiError::Unauthorized {
                        session.expire();
                    }
                    let _ = set_banner.try_set(Some(error.to_string()));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <h1 class="card-title text-2xl">"Register a book"</h1>

                    <Show when=move || banner.get().is_some()>
                        <ErrorBanner message=banner.get().unwrap_or_default() />
                    </Show>

                    <BookFormFields form=form show_cover_input=true />

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Registering..."
                                    }
                                        .into_any()
                                } else {
                                    "Register".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

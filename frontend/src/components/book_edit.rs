//! Edit an existing book. The form is prefilled from the current record;
//! success shows a confirmation briefly, then returns to the detail view.

use std::time::Duration;

use bookshelf_shared::Book;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::book_form::{BookFormFields, BookFormState};
use crate::components::feedback::{ErrorBanner, LoadingIndicator, SignInPrompt};
use crate::components::icons::ChevronLeft;
use crate::session::use_session;
use crate::state::{FetchState, submit_error_message};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// How long the success message stays up before navigating back.
const SUCCESS_DELAY: Duration = Duration::from_millis(800);

#[component]
pub fn BookEditPage(id: i64) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let form = BookFormState::new();
    let (state, set_state) = signal(FetchState::<Book>::Loading);
    let (submitting, set_submitting) = signal(false);
    let (banner, set_banner) = signal(Option::<String>::None);
    let (saved, set_saved) = signal(false);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.book(id).await.map(Book::from_record);
            if let Ok(book) = &result {
                form.load(book);
            }
            let _ = set_state.try_set(FetchState::resolve(result, &session));
        });
    });

    let on_submit = {
        let api = use_api();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() || !form.validate() {
                return;
            }

            set_submitting.set(true);
            set_banner.set(None);

            let api = api.clone();
            let payload = form.to_payload();
            spawn_local(async move {
                match api.update_book(id, &payload).await {
                    Ok(()) => {
                        let _ = set_saved.try_set(true);
                        set_timeout(
                            move || router.navigate(AppRoute::BookDetail(id)),
                            SUCCESS_DELAY,
                        );
                    }
                    Err(error) => {
                        if error == ApiError::Unauthorized {
                            session.expire();
                        }
                        let message = submit_error_message(
                            &error,
                            "You do not have permission to edit this book.",
                        );
                        // Form values stay intact; only the banner changes.
                        let _ = set_banner.try_set(Some(message));
                    }
                }
                let _ = set_submitting.try_set(false);
            });
        }
    };

    view! {
        <div class="max-w-xl mx-auto space-y-4">
            <Link to=AppRoute::BookDetail(id) class="btn btn-ghost btn-sm gap-1">
                <ChevronLeft attr:class="h-4 w-4" />
                "Back to book"
            </Link>

            {move || match state.get() {
                FetchState::Loading => view! { <LoadingIndicator /> }.into_any(),
                FetchState::AuthRequired => {
                    view! { <SignInPrompt message="Sign in to edit this book." /> }.into_any()
                }
                FetchState::NotFound => {
                    view! { <ErrorBanner message="This book could not be found." /> }.into_any()
                }
                FetchState::Forbidden => {
                    view! { <ErrorBanner message="You do not have permission to edit this book." /> }
                        .into_any()
                }
                FetchState::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
                FetchState::Ready(_) => {
                    let on_submit = on_submit.clone();
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <form class="card-body space-y-2" on:submit=on_submit>
                                <h1 class="card-title text-2xl">"Edit book"</h1>

                                <Show when=move || banner.get().is_some()>
                                    <ErrorBanner message=banner.get().unwrap_or_default() />
                                </Show>
                                <Show when=move || saved.get()>
                                    <div role="alert" class="alert alert-success">
                                        <span>"Book updated. Taking you back..."</span>
                                    </div>
                                </Show>

                                <BookFormFields form=form />

                                <div class="form-control mt-4">
                                    <button
                                        class="btn btn-primary"
                                        disabled=move || submitting.get() || saved.get()
                                    >
                                        {move || {
                                            if submitting.get() {
                                                view! {
                                                    <span class="loading loading-spinner"></span>
                                                    "Saving..."
                                                }
                                                    .into_any()
                                            } else {
                                                "Save changes".into_any()
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

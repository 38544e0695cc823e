//! Book detail with ownership-gated edit/delete.

use bookshelf_shared::{Book, is_owner};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::feedback::{ErrorBanner, LoadingIndicator, SignInPrompt};
use crate::components::icons::{ChevronLeft, Pencil, Trash2};
use crate::session::use_session;
use crate::state::{FetchState, submit_error_message};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| {
            w.confirm_with_message("Delete this book? This cannot be undone.")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[component]
pub fn BookDetailPage(id: i64) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    // Ownership is computed once at load and kept with the record.
    let (state, set_state) = signal(FetchState::<(Book, bool)>::Loading);
    let (deleting, set_deleting) = signal(false);
    let (action_error, set_action_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.book(id).await.map(|record| {
                let book = Book::from_record(record);
                let owned = is_owner(session.user_id(), &book);
                (book, owned)
            });
            let _ = set_state.try_set(FetchState::resolve(result, &session));
        });
    });

    let on_delete = {
        let api = use_api();
        move |_| {
            if deleting.get_untracked() || !confirm_delete() {
                return;
            }
            set_deleting.set(true);
            set_action_error.set(None);

            let api = api.clone();
            spawn_local(async move {
                match api.delete_book(id).await {
                    Ok(()) => router.navigate(AppRoute::Books),
                    Err(error) => {
                        if error == ApiError::Unauthorized {
                            session.expire();
                        }
                        // The book stays in local state; the failure is only
                        // reported.
                        let message = submit_error_message(
                            &error,
                            "You do not have permission to delete this book.",
                        );
                        let _ = set_action_error.try_set(Some(message));
                    }
                }
                let _ = set_deleting.try_set(false);
            });
        }
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-4">
            <Link to=AppRoute::Books class="btn btn-ghost btn-sm gap-1">
                <ChevronLeft attr:class="h-4 w-4" />
                "Back to catalogue"
            </Link>

            {move || match state.get() {
                FetchState::Loading => view! { <LoadingIndicator /> }.into_any(),
                FetchState::AuthRequired => {
                    view! { <SignInPrompt message="Sign in to view book details." /> }.into_any()
                }
                FetchState::NotFound => {
                    view! { <ErrorBanner message="This book could not be found." /> }.into_any()
                }
                FetchState::Forbidden => {
                    view! { <ErrorBanner message="You do not have permission to view this book." /> }
                        .into_any()
                }
                FetchState::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
                FetchState::Ready((book, owned)) => {
                    let on_delete = on_delete.clone();
                    view! {
                        <Show when=move || action_error.get().is_some()>
                            <ErrorBanner message=action_error.get().unwrap_or_default() />
                        </Show>

                        <div class="card lg:card-side bg-base-100 shadow-xl overflow-hidden">
                            {book
                                .has_cover()
                                .then(|| {
                                    view! {
                                        <figure class="lg:w-80 bg-base-300 shrink-0">
                                            <img
                                                src=book.thumbnail.clone()
                                                alt=book.title.clone()
                                                class="object-cover w-full h-full max-h-[32rem]"
                                            />
                                        </figure>
                                    }
                                })}
                            <div class="card-body gap-4">
                                <div class="flex items-center gap-2 flex-wrap">
                                    {owned
                                        .then(|| {
                                            view! {
                                                <span class="badge badge-primary badge-outline">
                                                    "Your book"
                                                </span>
                                            }
                                        })}
                                    {book
                                        .created_at
                                        .clone()
                                        .map(|at| {
                                            view! {
                                                <span class="text-xs text-base-content/50">
                                                    "Added " {at}
                                                </span>
                                            }
                                        })}
                                </div>

                                <h1 class="card-title text-3xl">{book.title.clone()}</h1>
                                {book
                                    .author
                                    .clone()
                                    .map(|author| {
                                        view! {
                                            <p class="text-base-content/70">"by " {author}</p>
                                        }
                                    })}

                                {book
                                    .description
                                    .clone()
                                    .map(|desc| {
                                        view! {
                                            <div>
                                                <h2 class="text-sm font-semibold text-base-content/60 mb-1">
                                                    "About this book"
                                                </h2>
                                                <p class="whitespace-pre-line leading-relaxed">
                                                    {desc}
                                                </p>
                                            </div>
                                        }
                                    })}

                                <Show when=move || owned>
                                    <div class="card-actions justify-end mt-auto pt-4">
                                        <Link
                                            to=AppRoute::BookEdit(id)
                                            class="btn btn-primary btn-sm gap-2"
                                        >
                                            <Pencil attr:class="h-4 w-4" />
                                            "Edit"
                                        </Link>
                                        <button
                                            class="btn btn-outline btn-error btn-sm gap-2"
                                            disabled=move || deleting.get()
                                            on:click=on_delete.clone()
                                        >
                                            <Trash2 attr:class="h-4 w-4" />
                                            {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

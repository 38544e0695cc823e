//! Landing page: a hero plus the six most recently added books.

use bookshelf_shared::{Book, sort_newest_first};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::book_card::BookGrid;
use crate::components::feedback::{ErrorBanner, LoadingIndicator};
use crate::components::icons::{BookOpen, Plus};
use crate::session::use_session;
use crate::state::FetchState;
use crate::web::route::AppRoute;
use crate::web::router::Link;

const RECENT_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (state, set_state) = signal(FetchState::<Vec<Book>>::Loading);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.list_books().await.map(|records| {
                let mut books: Vec<Book> = records.into_iter().map(Book::from_record).collect();
                sort_newest_first(&mut books);
                books.truncate(RECENT_COUNT);
                books
            });
            let _ = set_state.try_set(FetchState::resolve(result, &session));
        });
    });

    view! {
        <div class="max-w-7xl mx-auto space-y-10">
            <div class="hero bg-base-100 rounded-2xl shadow py-12">
                <div class="hero-content text-center">
                    <div class="max-w-lg space-y-4">
                        <div class="flex justify-center">
                            <div class="p-4 bg-primary/10 rounded-2xl text-primary">
                                <BookOpen attr:class="h-12 w-12" />
                            </div>
                        </div>
                        <h1 class="text-4xl font-bold">"Bookshelf"</h1>
                        <p class="text-base-content/70">
                            "Catalogue your books, keep notes on what they are about, and let AI draw the covers."
                        </p>
                        <div class="flex justify-center gap-3">
                            <Link to=AppRoute::Books class="btn btn-primary gap-2">
                                <BookOpen attr:class="h-4 w-4" />
                                "Browse books"
                            </Link>
                            <Link to=AppRoute::BookNew class="btn btn-outline gap-2">
                                <Plus attr:class="h-4 w-4" />
                                "Register a book"
                            </Link>
                        </div>
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                <div class="flex items-end justify-between">
                    <h2 class="text-xl font-bold">"Recently added"</h2>
                    <Link to=AppRoute::Books class="link link-primary text-sm">
                        "See all"
                    </Link>
                </div>
                {move || match state.get() {
                    FetchState::Loading => view! { <LoadingIndicator /> }.into_any(),
                    FetchState::Ready(books) => view! { <BookGrid books=books /> }.into_any(),
                    // The hero still stands on its own if the list is down.
                    FetchState::Failed(message) => {
                        view! { <ErrorBanner message=message /> }.into_any()
                    }
                    _ => view! { <ErrorBanner message="The book list is not available." /> }
                        .into_any(),
                }}
            </div>
        </div>
    }
}

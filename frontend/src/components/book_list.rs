//! Public catalogue: fetch everything once, then page client-side.

use bookshelf_shared::{Book, sort_newest_first};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::book_card::{BookGrid, Paginator};
use crate::components::feedback::{ErrorBanner, LoadingIndicator, SignInPrompt};
use crate::pagination::{clamp_page, needs_pager, page_count, page_slice};
use crate::session::use_session;
use crate::state::FetchState;

#[component]
pub fn BookListPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (state, set_state) = signal(FetchState::<Vec<Book>>::Loading);
    let (page, set_page) = signal(1usize);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.list_books().await.map(|records| {
                let mut books: Vec<Book> = records.into_iter().map(Book::from_record).collect();
                sort_newest_first(&mut books);
                books
            });
            // try_set: the page may have been navigated away while the
            // request was in flight.
            let _ = set_state.try_set(FetchState::resolve(result, &session));
        });
    });

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-end justify-between flex-wrap gap-2">
                <div>
                    <h1 class="text-2xl font-bold">"Book catalogue"</h1>
                    <p class="text-sm text-base-content/70">"Every book registered so far."</p>
                </div>
                {move || match state.get() {
                    FetchState::Ready(books) => {
                        Some(
                            view! {
                                <span class="badge badge-neutral">
                                    {format!("{} books", books.len())}
                                </span>
                            },
                        )
                    }
                    _ => None,
                }}
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <LoadingIndicator /> }.into_any(),
                FetchState::AuthRequired => {
                    view! { <SignInPrompt message="Sign in to browse the catalogue." /> }.into_any()
                }
                FetchState::NotFound | FetchState::Forbidden => {
                    view! { <ErrorBanner message="The book list is not available." /> }.into_any()
                }
                FetchState::Failed(message) => view! { <ErrorBanner message=message /> }.into_any(),
                FetchState::Ready(books) => {
                    let current = clamp_page(page.get(), books.len());
                    let total = page_count(books.len());
                    let paged = needs_pager(books.len());
                    let visible = page_slice(&books, current).to_vec();
                    view! {
                        <BookGrid books=visible />
                        <Show when=move || paged>
                            <Paginator
                                current=current
                                total=total
                                on_select=move |p: usize| set_page.set(p)
                            />
                        </Show>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

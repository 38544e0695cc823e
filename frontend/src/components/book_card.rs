//! List presentation: card, grid and the pager.

use bookshelf_shared::Book;
use leptos::prelude::*;

use crate::components::icons::BookOpen;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let router = use_router();
    let id = book.id;

    view! {
        <div
            class="card bg-base-100 shadow hover:shadow-xl transition-shadow cursor-pointer"
            on:click=move |_| router.navigate(AppRoute::BookDetail(id))
        >
            <figure class="aspect-[3/4] bg-base-300">
                {if book.has_cover() {
                    view! { <img src=book.thumbnail.clone() alt=book.title.clone() class="object-cover w-full h-full" /> }
                        .into_any()
                } else {
                    view! { <BookOpen attr:class="h-12 w-12 text-base-content/30" /> }.into_any()
                }}
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base line-clamp-1">{book.title.clone()}</h3>
                {book
                    .author
                    .clone()
                    .map(|author| view! { <p class="text-sm text-base-content/70">{author}</p> })}
                {book
                    .description
                    .clone()
                    .map(|desc| {
                        view! { <p class="text-xs text-base-content/50 line-clamp-2">{desc}</p> }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn BookGrid(books: Vec<Book>) -> impl IntoView {
    if books.is_empty() {
        return view! {
            <div class="text-center py-16 text-base-content/50">
                <BookOpen attr:class="h-12 w-12 mx-auto mb-4 opacity-40" />
                <p>"No books yet."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 xl:grid-cols-4 gap-4">
            {books
                .into_iter()
                .map(|book| view! { <BookCard book=book /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Prev/next pager over a client-side paginated list.
#[component]
pub fn Paginator(
    current: usize,
    total: usize,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="join flex justify-center mt-6">
            <button
                class="join-item btn btn-sm"
                disabled={current <= 1}
                on:click=move |_| on_select.run(current - 1)
            >
                "«"
            </button>
            <button class="join-item btn btn-sm btn-ghost no-animation">
                {format!("Page {current} of {total}")}
            </button>
            <button
                class="join-item btn btn-sm"
                disabled={current >= total}
                on:click=move |_| on_select.run(current + 1)
            >
                "»"
            </button>
        </div>
    }
}

//! Bookshelf frontend application.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: route model and history-API router
//! - `session`: persisted credential state
//! - `api`: REST client
//! - `state`, `pagination`, `validate`: page-controller building blocks
//! - `components`: UI layer, one module per page

mod api;
mod pagination;
mod session;
mod state;
mod validate;

mod components {
    pub mod book_card;
    pub mod book_create;
    pub mod book_detail;
    pub mod book_edit;
    mod book_form;
    pub mod book_list;
    mod feedback;
    pub mod home;
    mod icons;
    pub mod image_create;
    pub mod layout;
    pub mod login;
    pub mod my_books;
    pub mod signup;
}

// Browser plumbing: everything that touches window/history/storage lives here.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::api::BookshelfApi;
use crate::components::book_create::BookCreatePage;
use crate::components::book_detail::BookDetailPage;
use crate::components::book_edit::BookEditPage;
use crate::components::book_list::BookListPage;
use crate::components::home::HomePage;
use crate::components::image_create::ImageCreatePage;
use crate::components::layout::Shell;
use crate::components::login::LoginPage;
use crate::components::my_books::MyBooksPage;
use crate::components::signup::SignupPage;
use crate::session::SessionContext;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its page, all wrapped in the layout shell.
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Books => view! { <BookListPage /> }.into_any(),
        AppRoute::BookNew => view! { <BookCreatePage /> }.into_any(),
        AppRoute::BookDetail(id) => view! { <BookDetailPage id=id /> }.into_any(),
        AppRoute::BookEdit(id) => view! { <BookEditPage id=id /> }.into_any(),
        AppRoute::GenerateCover(id) => view! { <ImageCreatePage id=id /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::MyBooks => view! { <MyBooksPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    };

    view! { <Shell>{page}</Shell> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // Session state is the only cross-page mutable state; provide it once.
    let session = SessionContext::new();
    provide_context(session);

    // Same-origin API; the adapter prefixes /api/v1 itself.
    provide_context(BookshelfApi::new(""));

    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

//! Persistent chrome around every page: top navigation plus the sign-in /
//! sign-out controls.

use leptos::prelude::*;

use crate::components::icons::{BookOpen, LogOut, Plus};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let is_authenticated = move || session.state.get().is_some();

    let on_sign_out = move |_| {
        session.sign_out();
        router.navigate(AppRoute::Home);
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-md px-4 md:px-8">
                <div class="flex-1 gap-1">
                    <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                        <BookOpen attr:class="h-6 w-6 text-primary" />
                        "Bookshelf"
                    </Link>
                    <Link to=AppRoute::Books class="btn btn-ghost btn-sm hidden sm:inline-flex">
                        "Books"
                    </Link>
                    <Link to=AppRoute::MyBooks class="btn btn-ghost btn-sm hidden sm:inline-flex">
                        "My books"
                    </Link>
                </div>
                <div class="flex-none gap-2">
                    <Link to=AppRoute::BookNew class="btn btn-primary btn-sm gap-2">
                        <Plus attr:class="h-4 w-4" />
                        "Register book"
                    </Link>
                    <Show
                        when=is_authenticated
                        fallback=move || {
                            view! {
                                <Link to=AppRoute::Login class="btn btn-outline btn-sm">
                                    "Sign in"
                                </Link>
                                <Link to=AppRoute::Signup class="btn btn-ghost btn-sm">
                                    "Sign up"
                                </Link>
                            }
                        }
                    >
                        <button on:click=on_sign_out class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" />
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </div>

            <main class="px-4 md:px-8 py-6">{children()}</main>
        </div>
    }
}

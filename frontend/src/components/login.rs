//! Sign-in page. A successful login persists the credential pair and lands
//! on the catalogue.

use bookshelf_shared::protocol::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::icons::BookOpen;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if email.get_untracked().trim().is_empty() || password.get_untracked().is_empty() {
            set_error_msg.set(Some("Please enter both email and password.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match api.login(&request).await {
                Ok(grant) => match grant.token {
                    Some(token) => {
                        session.sign_in(token, grant.user_id);
                        router.navigate(AppRoute::Books);
                        return;
                    }
                    None => {
                        let _ = set_error_msg.try_set(Some(ApiError::Malformed.to_string()));
                    }
                },
                Err(error) => {
                    let message = match error {
                        ApiError::Unauthorized => "Invalid email or password.".to_string(),
                        ApiError::NotFound => "No account found for that email.".to_string(),
                        other => other.to_string(),
                    };
                    let _ = set_error_msg.try_set(Some(message));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero py-12">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <BookOpen attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Bookshelf"</h1>
                        <p class="text-base-content/70">"Sign in to manage your books"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || {
                                    if submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Signing in..."
                                        }
                                            .into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/70 mt-2">
                            "No account yet? "
                            <Link to=AppRoute::Signup class="link link-primary">
                                "Sign up"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

//! Account registration. A successful signup sends the user to the sign-in
//! page; it never signs them in implicitly.

use bookshelf_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::components::icons::BookOpen;
use crate::validate::check_signup_input;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Some(problem) = check_signup_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            set_error_msg.set(Some(problem.to_string()));
            return;
        }

        set_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let request = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match api.register(&request).await {
                Ok(()) => {
                    router.navigate(AppRoute::Login);
                    return;
                }
                Err(error) => {
                    let message = match error {
                        ApiError::Server(409) => "That email is already registered.".to_string(),
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
                        <h1 class="text-3xl font-bold">"Create an account"</h1>
                        <p class="text-base-content/70">"Start cataloguing your books"</p>
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
                            <label class="label" for="name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your name"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                            />
                        </div>
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
                        <div class="form-control">
                            <label class="label" for="password-confirm">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                id="password-confirm"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || {
                                    if submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Creating account..."
                                        }
                                            .into_any()
                                    } else {
                                        "Sign up".into_any()
                                    }
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center text-base-content/70 mt-2">
                            "Already have an account? "
                            <Link to=AppRoute::Login class="link link-primary">
                                "Sign in"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

//! Small shared fragments for the common page states.

use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// Page-level error banner.
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error">
            <span>{message}</span>
        </div>
    }
}

/// Inline sign-in prompt for the `AuthRequired` state. Renders in place
/// instead of redirecting so browser history is preserved.
#[component]
pub fn SignInPrompt(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow max-w-md mx-auto mt-8">
            <div class="card-body items-center text-center">
                <p>{message}</p>
                <div class="card-actions mt-2">
                    <Link to=AppRoute::Login class="btn btn-primary btn-sm">
                        "Sign in"
                    </Link>
                    <Link to=AppRoute::Signup class="btn btn-ghost btn-sm">
                        "Sign up"
                    </Link>
                </div>
            </div>
        </div>
    }
}

//! Shared form state for the create and edit pages.
//!
//! `RwSignal` fields make the whole struct `Copy`, so it passes freely into
//! event closures and child components.

use bookshelf_shared::{Book, BookPayload};
use leptos::prelude::*;

use crate::validate::{BookFieldErrors, check_book_input};

#[derive(Clone, Copy)]
pub struct BookFormState {
    pub title: RwSignal<String>,
    pub author: RwSignal<String>,
    pub description: RwSignal<String>,
    pub cover_url: RwSignal<String>,
    pub errors: RwSignal<BookFieldErrors>,
}

impl BookFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            cover_url: RwSignal::new(String::new()),
            errors: RwSignal::new(BookFieldErrors::default()),
        }
    }

    /// Prefills the form from an existing book (edit flow).
    pub fn load(&self, book: &Book) {
        self.title.set(book.title.clone());
        self.author.set(book.author.clone().unwrap_or_default());
        self.description.set(book.description.clone().unwrap_or_default());
        self.cover_url.set(book.thumbnail.clone());
        self.errors.set(BookFieldErrors::default());
    }

    /// Runs client-side validation and records field errors. No request may
    /// leave while this returns false.
    pub fn validate(&self) -> bool {
        let errors = check_book_input(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
        );
        let clean = errors.is_clean();
        self.errors.set(errors);
        clean
    }

    pub fn to_payload(&self) -> BookPayload {
        let cover = self.cover_url.get_untracked().trim().to_string();
        BookPayload {
            title: self.title.get_untracked().trim().to_string(),
            author: self.author.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            cover_url: (!cover.is_empty()).then_some(cover),
        }
    }
}

impl Default for BookFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The labeled inputs shared by create and edit. The cover URL input (with
/// inline preview) only appears on create; edit covers go through the AI
/// generation flow instead.
#[component]
pub fn BookFormFields(form: BookFormState, #[prop(optional)] show_cover_input: bool) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for="title">
                <span class="label-text">"Title *"</span>
            </label>
            <input
                id="title"
                type="text"
                placeholder="Book title"
                class=move || {
                    if form.errors.get().title.is_some() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
                prop:value=form.title
                on:input=move |ev| form.title.set(event_target_value(&ev))
            />
            {move || {
                form.errors
                    .get()
                    .title
                    .map(|msg| view! { <p class="text-error text-sm mt-1">{msg}</p> })
            }}
        </div>

        <div class="form-control">
            <label class="label" for="author">
                <span class="label-text">"Author"</span>
            </label>
            <input
                id="author"
                type="text"
                placeholder="Author (optional)"
                class="input input-bordered w-full"
                prop:value=form.author
                on:input=move |ev| form.author.set(event_target_value(&ev))
            />
        </div>

        <div class="form-control">
            <label class="label" for="description">
                <span class="label-text">"Description *"</span>
            </label>
            <textarea
                id="description"
                rows="4"
                placeholder="What is this book about?"
                class=move || {
                    if form.errors.get().description.is_some() {
                        "textarea textarea-bordered textarea-error w-full"
                    } else {
                        "textarea textarea-bordered w-full"
                    }
                }
                prop:value=form.description
                on:input=move |ev| form.description.set(event_target_value(&ev))
            ></textarea>
            {move || {
                form.errors
                    .get()
                    .description
                    .map(|msg| view! { <p class="text-error text-sm mt-1">{msg}</p> })
            }}
        </div>

        <Show when=move || show_cover_input>
            <div class="form-control">
                <label class="label" for="cover-url">
                    <span class="label-text">"Cover URL"</span>
                </label>
                <input
                    id="cover-url"
                    type="text"
                    placeholder="https://... (optional, or generate one later)"
                    class="input input-bordered w-full"
                    prop:value=form.cover_url
                    on:input=move |ev| form.cover_url.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || !form.cover_url.get().trim().is_empty()>
                <div class="flex justify-center">
                    <img
                        src=move || form.cover_url.get()
                        alt="cover preview"
                        class="max-h-64 rounded-lg shadow"
                    />
                </div>
            </Show>
        </Show>
    }
}

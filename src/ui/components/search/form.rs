use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

/// Title/artist form; submits via the button or Enter in either field
#[component]
pub fn SearchForm() -> Element {
    let ctx = use_context::<SearchContext>();
    let mut title = ctx.title;
    let mut artist = ctx.artist;
    let is_searching = ctx.is_searching;

    let on_submit = {
        let ctx = ctx.clone();
        move |_event: MouseEvent| {
            ctx.search();
        }
    };

    let on_enter = {
        let ctx = ctx.clone();
        move |event: KeyboardEvent| {
            if event.key() == Key::Enter {
                ctx.search();
            }
        }
    };

    rsx! {
        div { class: "space-y-4",
            input {
                class: "w-full p-3 rounded-lg bg-gray-900 text-gray-100 placeholder-gray-500 border border-gray-700",
                placeholder: "Title",
                value: "{title.read()}",
                oninput: move |event: FormEvent| {
                    title.set(event.value());
                },
                onkeydown: on_enter.clone(),
            }
            input {
                class: "w-full p-3 rounded-lg bg-gray-900 text-gray-100 placeholder-gray-500 border border-gray-700",
                placeholder: "Artist",
                value: "{artist.read()}",
                oninput: move |event: FormEvent| {
                    artist.set(event.value());
                },
                onkeydown: on_enter,
            }
            button {
                class: "w-full px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-500 font-medium disabled:opacity-50",
                disabled: *is_searching.read()
                    || title.read().trim().is_empty()
                    || artist.read().trim().is_empty(),
                onclick: on_submit,
                if *is_searching.read() {
                    "Searching..."
                } else {
                    "Find Similar Music"
                }
            }
        }
    }
}

use super::{form::SearchForm, list::SearchResults, status::SearchStatus};
use dioxus::prelude::*;

/// Main similarity search page
#[component]
pub fn SearchPage() -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-900 p-6",
            div { class: "bg-gray-950 border border-gray-800 rounded-2xl shadow-lg w-full max-w-md p-8",
                h1 { class: "text-2xl font-semibold text-white mb-6 text-center",
                    "Music Similarity Finder"
                }
                SearchForm {}
                SearchStatus {}
                SearchResults {}
            }
        }
    }
}

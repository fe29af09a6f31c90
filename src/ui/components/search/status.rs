use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;

#[component]
pub fn SearchStatus() -> Element {
    let ctx = use_context::<SearchContext>();
    let is_searching = ctx.is_searching;
    let error_text = ctx
        .outcome
        .read()
        .as_ref()
        .and_then(|outcome| outcome.error_text())
        .map(String::from);

    rsx! {
        if *is_searching.read() {
            div { class: "text-center py-8",
                p { class: "text-gray-400", "Searching..." }
            }
        } else if let Some(error) = error_text {
            div { class: "mt-6 bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded",
                "{error}"
            }
        }
    }
}

use super::item::SongItem;
use crate::ui::search_context::{SearchContext, SearchOutcome};
use dioxus::prelude::*;

#[component]
pub fn SearchResults() -> Element {
    let ctx = use_context::<SearchContext>();
    let songs = match ctx.outcome.read().as_ref() {
        Some(SearchOutcome::Found { songs }) => songs.clone(),
        _ => {
            return rsx! {
                div {}
            };
        }
    };

    rsx! {
        div { class: "mt-6",
            h2 { class: "text-xl font-semibold text-white mb-4", "Songs" }
            ul { class: "space-y-2",
                for song in songs.iter() {
                    SongItem { key: "{song.id}", song: song.clone() }
                }
            }
        }
    }
}

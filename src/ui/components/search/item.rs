use crate::models::Song;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SongItemProps {
    pub song: Song,
}

#[component]
pub fn SongItem(props: SongItemProps) -> Element {
    rsx! {
        li { class: "p-4 rounded-xl bg-gray-800 shadow-sm hover:bg-gray-700",
            p { class: "text-lg font-semibold text-gray-100", "{props.song.title}" }
            p { class: "text-sm text-gray-400", "{props.song.artist}" }
        }
    }
}

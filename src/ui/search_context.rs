use crate::config::use_config;
use crate::models::Song;
use crate::search_api::{SearchClient, SearchRequest, SearchResponse};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Message shown for any failure the server did not explain itself
pub const FAILURE_MESSAGE: &str = "Something went wrong.";

/// What the last completed search settled to
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Server answered with an explicit error payload
    Rejected { message: String },
    /// Transport failure, non-2xx status, or unrecognized payload
    Failed,
    /// Server answered with a song list
    Found { songs: Vec<Song> },
}

impl SearchOutcome {
    /// User-facing error text, if this outcome is an error.
    ///
    /// Server-reported messages are passed through verbatim; everything else
    /// collapses to one generic line. The underlying cause is only logged.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            SearchOutcome::Rejected { message } => Some(message),
            SearchOutcome::Failed => Some(FAILURE_MESSAGE),
            SearchOutcome::Found { .. } => None,
        }
    }
}

#[derive(Clone)]
pub struct SearchContext {
    pub title: Signal<String>,
    pub artist: Signal<String>,
    pub is_searching: Signal<bool>,
    pub outcome: Signal<Option<SearchOutcome>>,
    client: SearchClient,
}

impl SearchContext {
    /// Submit the current title/artist pair to the search API.
    ///
    /// Clears any previous outcome before the request goes out and records
    /// exactly one outcome when it settles. The form values are left in
    /// place so the user can refine and resubmit. There is no cancellation:
    /// if submissions overlap, the last settlement wins.
    pub fn search(&self) {
        let title = self.title.read().clone();
        let artist = self.artist.read().clone();

        if title.trim().is_empty() || artist.trim().is_empty() {
            return;
        }

        let mut is_searching = self.is_searching;
        let mut outcome = self.outcome;
        let client = self.client.clone();

        is_searching.set(true);
        outcome.set(None);

        spawn(async move {
            let request = SearchRequest { title, artist };
            debug!(
                "searching for songs similar to '{}' by '{}'",
                request.title, request.artist
            );

            let settled = match client.find_similar(&request).await {
                Ok(SearchResponse::Rejected(rejection)) => {
                    debug!("search rejected: {}", rejection.message);
                    SearchOutcome::Rejected {
                        message: rejection.message,
                    }
                }
                Ok(SearchResponse::Found(results)) => {
                    debug!("search returned {} song(s)", results.songs.len());
                    SearchOutcome::Found {
                        songs: results.songs,
                    }
                }
                Err(e) => {
                    warn!("search request failed: {}", e);
                    SearchOutcome::Failed
                }
            };

            outcome.set(Some(settled));
            is_searching.set(false);
        });
    }
}

/// Provider component to make search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();

    let search_ctx = SearchContext {
        title: use_signal(|| String::new()),
        artist: use_signal(|| String::new()),
        is_searching: use_signal(|| false),
        outcome: use_signal(|| None),
        client: SearchClient::new(config.api_base_url.clone()),
    };

    use_context_provider(move || search_ctx);

    rsx! {
        {children}
    }
}

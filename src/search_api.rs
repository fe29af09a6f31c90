use crate::models::Song;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("search API returned HTTP {0}")]
    Status(StatusCode),
    #[error("unrecognized search API payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of the one call the client makes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub title: String,
    pub artist: String,
}

/// Discriminated search API payload.
///
/// The server answers either `{"status": "error", "message": ...}` or a
/// success body carrying a `songs` array. Any other shape fails the decode.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchResponse {
    Rejected(Rejection),
    Found(SearchResults),
}

/// Server-reported error; `message` is shown to the user verbatim
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Rejection {
    pub status: ErrorStatus,
    pub message: String,
}

/// The literal `"error"` discriminant. Any other status value makes the
/// payload decode as a result list instead.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub enum ErrorStatus {
    #[serde(rename = "error")]
    Error,
}

/// Successful search reply. The server also echoes the query and a
/// `"status": "success"` marker; both are ignored here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResults {
    pub songs: Vec<Song>,
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// POST the title/artist pair to `/api/search` and decode the reply.
    ///
    /// A non-2xx status is a failure regardless of what the body says.
    pub async fn find_similar(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/api/search", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        let decoded = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_client_creation() {
        let client = SearchClient::new("http://localhost:8000".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn error_payload_decodes_to_rejection() {
        let body = r#"{"status": "error", "message": "Song 'Nude' by 'Radiohead' not found in database"}"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();

        match decoded {
            SearchResponse::Rejected(rejection) => {
                assert_eq!(
                    rejection.message,
                    "Song 'Nude' by 'Radiohead' not found in database"
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn song_list_decodes_to_results() {
        let body = r#"{"songs": [{"id": 1, "title": "A", "artist": "B"}]}"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();

        match decoded {
            SearchResponse::Found(results) => {
                assert_eq!(results.songs.len(), 1);
                assert_eq!(results.songs[0].id, 1);
                assert_eq!(results.songs[0].title, "A");
                assert_eq!(results.songs[0].artist, "B");
            }
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn full_server_reply_tolerates_extra_fields() {
        // The server sends a success marker and echoes the query alongside
        // the song list.
        let body = r#"{
            "status": "success",
            "query": {"title": "Nude", "artist": "Radiohead"},
            "songs": [
                {"id": 7, "title": "Reckoner", "artist": "Radiohead"},
                {"id": 12, "title": "Re: Stacks", "artist": "Bon Iver"}
            ]
        }"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();

        match decoded {
            SearchResponse::Found(results) => {
                assert_eq!(results.songs.len(), 2);
                assert_eq!(results.songs[1].artist, "Bon Iver");
            }
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn empty_song_list_is_still_a_result() {
        let body = r#"{"songs": []}"#;
        let decoded: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            decoded,
            SearchResponse::Found(SearchResults { songs: Vec::new() })
        );
    }

    #[test]
    fn unknown_shape_fails_closed() {
        // Neither an error payload nor a song list.
        assert!(serde_json::from_str::<SearchResponse>(r#"{"ok": true}"#).is_err());
        assert!(serde_json::from_str::<SearchResponse>("[]").is_err());
        assert!(serde_json::from_str::<SearchResponse>("null").is_err());
    }

    #[test]
    fn error_without_message_fails_closed() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"status": "error"}"#).is_err());
    }

    #[test]
    fn non_error_status_without_songs_fails_closed() {
        // A status marker alone does not make a success payload.
        let body = r#"{"status": "success", "message": "all good"}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn request_body_serializes_title_and_artist() {
        let request = SearchRequest {
            title: "Nude".to_string(),
            artist: "Radiohead".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Nude", "artist": "Radiohead"})
        );
    }
}

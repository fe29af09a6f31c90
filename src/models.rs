use serde::{Deserialize, Serialize};

/// A song returned by the similarity search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

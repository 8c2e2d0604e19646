// Jikan v4 search response, reduced to the fields this client reads.
// See https://docs.api.jikan.moe/

use serde::Deserialize;

// Response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JikanList<T> {
    pub data: Vec<T>,
}

/// A single entry of the `data` array. Every field is optional on the wire;
/// the decoder decides what is required. Fields not listed here are skipped
/// whatever their type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnimeEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
}

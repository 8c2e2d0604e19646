use crate::{
    modules::search::domain::{AnimeRecord, SearchResult},
    shared::errors::{AppError, AppResult},
};

use super::models::{AnimeEntry, JikanList};

/// Decode a Jikan search body into records.
///
/// Fails with [`AppError::DecodeError`] when the body is not JSON, has no top-level
/// `data` array, or that array holds something other than objects. Entries without a
/// `title` are skipped (and logged) rather than failing the whole response; all other
/// entries keep their source order.
pub fn decode(raw_body: &str) -> AppResult<SearchResult> {
    let envelope: JikanList<AnimeEntry> = serde_json::from_str(raw_body).map_err(|e| {
        AppError::DecodeError(format!(
            "Failed to parse Jikan response: {}. Response: {}",
            e,
            preview(raw_body)
        ))
    })?;

    let total = envelope.data.len();
    let records: Vec<AnimeRecord> = envelope
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| map_entry(index, entry))
        .collect();

    if records.len() < total {
        log::debug!(
            "Jikan: kept {} of {} entries after dropping untitled ones",
            records.len(),
            total
        );
    }

    Ok(SearchResult::new(records))
}

fn map_entry(index: usize, entry: AnimeEntry) -> Option<AnimeRecord> {
    match entry.title {
        Some(title) => Some(AnimeRecord::new(title, entry.synopsis)),
        None => {
            log::warn!("Jikan: skipping entry {} without a title", index);
            None
        }
    }
}

fn preview(body: &str) -> String {
    const MAX_PREVIEW_CHARS: usize = 200;
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

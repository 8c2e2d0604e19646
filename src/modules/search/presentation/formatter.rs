//! Text rendering for search results, errors and status lines.
//!
//! Everything here is pure: no I/O and no shared state, so any front end
//! (terminal, GUI, tests) can call it directly.

use unicode_width::UnicodeWidthStr;

use crate::{
    modules::search::domain::{SearchQuery, SearchResult},
    shared::errors::AppError,
};

/// Column width synopses are wrapped to.
pub const WRAP_WIDTH: usize = 80;

/// Spaces in front of every continuation line. Lines the text up under `Synopsis: `.
pub const CONTINUATION_INDENT: usize = 11;

pub const NO_SYNOPSIS: &str = "No synopsis available";

const DIVIDER_WIDTH: usize = 81;

/// Render a finished search for the output area.
pub fn format_results(result: &SearchResult, query: &SearchQuery) -> String {
    if result.is_empty() {
        return format!("No anime found for: {}", query);
    }

    let divider = "─".repeat(DIVIDER_WIDTH);
    let mut out = format!("Found {} anime(s) for: {}\n\n", result.len(), query);

    for (index, record) in result.records().iter().enumerate() {
        out.push_str(&format!("{}. Title: {}\n", index + 1, record.title));

        match record.synopsis_text() {
            Some(synopsis) => out.push_str(&format!(
                "Synopsis: {}\n",
                wrap_text(synopsis, WRAP_WIDTH, CONTINUATION_INDENT)
            )),
            None => out.push_str(&format!("Synopsis: {}\n", NO_SYNOPSIS)),
        }

        out.push_str(&divider);
        out.push_str("\n\n");
    }

    out
}

/// Placeholder shown while a request is in flight.
pub fn format_searching(query: &SearchQuery) -> String {
    format!("Searching for: {}\nPlease wait...", query)
}

/// Body shown in the output area when a search fails.
pub fn format_error(error: &AppError) -> String {
    format!("Error occurred while searching:\n{}", error.user_message())
}

/// Greedy word wrap.
///
/// Text that already fits in `width` columns comes back unchanged. Longer text is split
/// on whitespace and re-joined with single spaces; a word that would overflow the current
/// line starts a new one prefixed by `indent` spaces, which count toward `width`.
/// Words wider than a line are kept whole.
pub fn wrap_text(text: &str, width: usize, indent: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let padding = " ".repeat(indent);
    let mut wrapped = String::with_capacity(text.len() + text.len() / width.max(1) * (indent + 1));
    let mut line_width = 0usize;
    let mut line_has_word = false;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if line_has_word && line_width + 1 + word_width > width {
            wrapped.push('\n');
            wrapped.push_str(&padding);
            line_width = indent;
            line_has_word = false;
        }

        if line_has_word {
            wrapped.push(' ');
            line_width += 1;
        }

        wrapped.push_str(word);
        line_width += word_width;
        line_has_word = true;
    }

    wrapped
}

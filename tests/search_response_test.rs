//! Decoder and formatter behavior through the public API
//!
//! No network: bodies are literal Jikan-shaped JSON.

use anime_search_lib::{
    modules::search::{
        domain::{AnimeRecord, SearchQuery, SearchResult},
        infrastructure::{build_request_url, decode},
        presentation::{format_results, wrap_text, CONTINUATION_INDENT, WRAP_WIDTH},
    },
    shared::{config::SearchConfig, errors::AppError},
};
use reqwest::Url;
use unicode_width::UnicodeWidthStr;

const LONG_SYNOPSIS: &str = "Moments prior to Naruto Uzumaki's birth, a huge demon known as \
the Kyuubi, the Nine-Tailed Fox, attacked Konohagakure, the Hidden Leaf Village, and wreaked \
havoc. In order to put an end to the Kyuubi's rampage, the leader of the village, the Fourth \
Hokage, sacrificed his life and sealed the monstrous beast inside the newborn Naruto.";

#[test]
fn test_request_url_for_many_queries() {
    let endpoint = SearchConfig::default().search_endpoint().unwrap();

    for raw in ["naruto", "Attack on Titan", "100% Pascal-sensei", "Re:Zero", "鋼の錬金術師", "a+b=c"] {
        let query = SearchQuery::parse(raw).unwrap();
        let url = build_request_url(&endpoint, &query);

        let encoded = urlencoding::encode(raw).into_owned();
        assert!(
            url.as_str().contains(&format!("q={}&", encoded)),
            "{} does not carry {}",
            url,
            encoded
        );
        assert!(Url::parse(url.as_str()).is_ok());
        assert!(url.as_str().ends_with("&limit=5&fields=title,synopsis"));
    }
}

#[test]
fn test_blank_queries_are_input_errors() {
    for raw in ["", "   ", "\n\t"] {
        assert!(matches!(
            SearchQuery::parse(raw),
            Err(AppError::InputError(_))
        ));
    }
}

#[test]
fn test_decode_naruto() {
    let result = decode(r#"{"data":[{"title":"Naruto","synopsis":"A ninja."}]}"#).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.records()[0].title, "Naruto");
    assert_eq!(result.records()[0].synopsis.as_deref(), Some("A ninja."));
}

#[test]
fn test_empty_data_formats_no_results_message() {
    let result = decode(r#"{"data":[]}"#).unwrap();
    assert!(result.is_empty());

    let query = SearchQuery::parse("Nonexistent Show 9000").unwrap();
    let text = format_results(&result, &query);
    assert_eq!(text, "No anime found for: Nonexistent Show 9000");
}

#[test]
fn test_missing_synopsis_shows_placeholder() {
    let result = decode(r#"{"data":[{"title":"Mystery"}]}"#).unwrap();
    assert_eq!(result.records()[0], AnimeRecord::new("Mystery", None));

    let query = SearchQuery::parse("mystery").unwrap();
    let text = format_results(&result, &query);
    assert!(text.contains("1. Title: Mystery\n"));
    assert!(text.contains("Synopsis: No synopsis available\n"));
}

#[test]
fn test_truncated_payload_fails_cleanly() {
    let full = r#"{"data":[{"title":"Naruto","synopsis":"A ninja."}]}"#;
    for cut in [1, 10, full.len() - 1] {
        let result = decode(&full[..cut]);
        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }
}

#[test]
fn test_order_is_preserved() {
    let body = r#"{"data":[{"title":"C"},{"title":"A"},{"title":"B"},{"title":"A"}]}"#;
    let titles: Vec<String> = decode(body)
        .unwrap()
        .into_records()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["C", "A", "B", "A"]);
}

#[test]
fn test_long_synopsis_wraps_within_width() {
    let wrapped = wrap_text(LONG_SYNOPSIS, WRAP_WIDTH, CONTINUATION_INDENT);
    let lines: Vec<&str> = wrapped.lines().collect();
    let indent = " ".repeat(CONTINUATION_INDENT);

    assert!(lines.len() > 1);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.width() <= WRAP_WIDTH, "line {} too wide: {:?}", i, line);
        if i > 0 {
            assert!(line.starts_with(&indent));
            assert!(!line[CONTINUATION_INDENT..].starts_with(' '));
        }
    }

    // no words lost or reordered
    let rejoined: Vec<&str> = wrapped.split_whitespace().collect();
    let original: Vec<&str> = LONG_SYNOPSIS.split_whitespace().collect();
    assert_eq!(rejoined, original);
}

#[test]
fn test_formatted_block_contains_wrapped_synopsis() {
    let result = SearchResult::new(vec![AnimeRecord::new(
        "Naruto",
        Some(LONG_SYNOPSIS.to_string()),
    )]);
    let query = SearchQuery::parse("naruto").unwrap();
    let text = format_results(&result, &query);

    assert!(text.starts_with("Found 1 anime(s) for: naruto\n\n1. Title: Naruto\nSynopsis: "));
    assert!(text.contains(&format!("\n{}", " ".repeat(CONTINUATION_INDENT))));
    assert!(text.ends_with(&format!("{}\n\n", "─".repeat(81))));
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Characters of lyrics kept in a result row preview.
pub const SNIPPET_CHARS: usize = 60;

/// A query that is safe to send: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongResult {
    pub title: String,
    pub artist: String,
    pub lyrics: String,
}

impl SongResult {
    /// Leading character of the title, shown as the row avatar.
    pub fn avatar(&self) -> String {
        self.title.chars().take(1).collect()
    }

    /// Preview of the lyrics. The ellipsis is appended even when nothing was cut.
    pub fn snippet(&self) -> String {
        let mut snippet: String = self.lyrics.chars().take(SNIPPET_CHARS).collect();
        snippet.push_str("...");
        snippet
    }

    pub fn heading(&self) -> String {
        format!("{} - {}", self.title, self.artist)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

impl<'a> From<&'a SearchQuery> for SearchRequest<'a> {
    fn from(query: &'a SearchQuery) -> Self {
        Self {
            query: query.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SongResult>,
}

/// Body the server sends alongside 4xx/5xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, lyrics: &str) -> SongResult {
        SongResult {
            title: title.to_string(),
            artist: "Artist".to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = SearchQuery::parse("  love song \n").unwrap();
        assert_eq!(query.as_str(), "love song");
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \t\n").is_none());
    }

    #[test]
    fn test_short_lyrics_still_get_ellipsis() {
        let song = song("Title", "0123456789");
        assert_eq!(song.snippet(), "0123456789...");
    }

    #[test]
    fn test_long_lyrics_are_cut_at_sixty_chars() {
        let lyrics = "x".repeat(200);
        let snippet = song("Title", &lyrics).snippet();
        assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let lyrics = "ż".repeat(70);
        let snippet = song("Title", &lyrics).snippet();
        assert_eq!(snippet, format!("{}...", "ż".repeat(SNIPPET_CHARS)));
    }

    #[test]
    fn test_avatar_is_first_char() {
        assert_eq!(song("Żywiec", "").avatar(), "Ż");
        assert_eq!(song("", "").avatar(), "");
    }

    #[test]
    fn test_heading() {
        let song = SongResult {
            title: "A".to_string(),
            artist: "B".to_string(),
            lyrics: String::new(),
        };
        assert_eq!(song.heading(), "A - B");
    }

    #[test]
    fn test_request_body_shape() {
        let query = SearchQuery::parse("hello").unwrap();
        let body = serde_json::to_string(&SearchRequest::from(&query)).unwrap();
        assert_eq!(body, r#"{"query":"hello"}"#);
    }

    #[test]
    fn test_response_without_results_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_response_requires_song_fields() {
        let body = r#"{"results": [{"title": "A", "artist": "B"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}

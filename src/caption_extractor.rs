use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: WebVTT caption track to plain-text transcript extraction

// @const: WEBVTT format header (only significant on the first line)
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^WEBVTT").unwrap()
});

// @const: NOTE comment block opener
static NOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^NOTE(?:\s|$)").unwrap()
});

// @const: STYLE block opener
static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^STYLE(?:\s|$)").unwrap()
});

// @const: Cue index line (digits only)
static CUE_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+$").unwrap()
});

// @const: Cue timing line prefix ([[H]H:]MM:SS.mmm --> ...)
static CUE_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{1,2}:)?\d{2}:\d{2}\.\d{3}\s+-->").unwrap()
});

// @const: HTML-like tag (lexical, not markup-aware)
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").unwrap()
});

// @const: Whitespace run
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Converts a raw WebVTT caption track into a deduplicated, order-preserving
/// plain-text transcript. Pure and stateless; never fails, degrading to an
/// empty string for anything it cannot make sense of.
pub struct CaptionExtractor;

impl CaptionExtractor {
    /// Extract the plain-text transcript from a raw WebVTT track.
    ///
    /// Header, NOTE/STYLE openers, cue indices, and cue timing lines are
    /// dropped; surviving cue text is stripped of markup, whitespace-collapsed,
    /// and globally deduplicated while preserving first-seen order.
    pub fn extract(raw_track: &str) -> String {
        if raw_track.is_empty() {
            return String::new();
        }

        let text = raw_track.strip_prefix('\u{FEFF}').unwrap_or(raw_track);

        let mut collected = Vec::new();
        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if index == 0 && Self::is_header_line(line) {
                continue;
            }
            // Only the opening line of a NOTE/STYLE block is recognized;
            // continuation lines of multi-line blocks pass through untouched.
            if Self::is_note_opener(line) || Self::is_style_opener(line) {
                continue;
            }
            if Self::is_cue_index(line) {
                continue;
            }
            if Self::is_cue_timing(line) {
                continue;
            }

            let stripped = Self::strip_markup(line);
            if stripped.is_empty() {
                continue;
            }
            collected.push(stripped);
        }

        // Global de-duplication while preserving first-seen order
        let mut seen: HashSet<&str> = HashSet::with_capacity(collected.len());
        let mut deduped: Vec<&str> = Vec::with_capacity(collected.len());
        for item in &collected {
            if seen.insert(item.as_str()) {
                deduped.push(item.as_str());
            }
        }

        deduped.join("\n")
    }

    /// Extract from an optional track, treating an absent track as empty.
    pub fn extract_optional(raw_track: Option<&str>) -> String {
        raw_track.map(Self::extract).unwrap_or_default()
    }

    /// Check whether a trimmed line is the WEBVTT format header.
    /// Callers must only apply this to the first line of a track.
    pub fn is_header_line(line: &str) -> bool {
        HEADER_REGEX.is_match(line)
    }

    /// Check whether a trimmed line opens a NOTE comment block.
    pub fn is_note_opener(line: &str) -> bool {
        NOTE_REGEX.is_match(line)
    }

    /// Check whether a trimmed line opens a STYLE block.
    pub fn is_style_opener(line: &str) -> bool {
        STYLE_REGEX.is_match(line)
    }

    /// Check whether a trimmed line is a cue index (digits only).
    pub fn is_cue_index(line: &str) -> bool {
        CUE_INDEX_REGEX.is_match(line)
    }

    /// Check whether a trimmed line is a cue timing line. Trailing cue
    /// settings after the arrow are part of the match and discarded with it.
    pub fn is_cue_timing(line: &str) -> bool {
        CUE_TIMING_REGEX.is_match(line)
    }

    /// Strip HTML-like tags and collapse whitespace runs into single spaces.
    /// Tag matching is purely lexical (text between `<` and the next `>`),
    /// so malformed markup may strip more or less than a validating parser.
    pub fn strip_markup(line: &str) -> String {
        let without_tags = TAG_REGEX.replace_all(line, " ");
        WHITESPACE_REGEX
            .replace_all(&without_tags, " ")
            .trim()
            .to_string()
    }
}

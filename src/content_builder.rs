// @module: Final content assembly for collected page context

/// Heading prepended to a transcript when it is combined with page Markdown.
pub const CAPTION_HEADING: &str = "Video caption:";

/// Combines an extracted caption transcript with unrelated page Markdown
/// into the final content blob handed to downstream consumers.
pub struct ContentBuilder;

impl ContentBuilder {
    /// Prepend the caption heading and transcript to page Markdown.
    ///
    /// An empty (or whitespace-only) transcript contributes nothing: the
    /// Markdown is returned unchanged so a missing caption track never
    /// alters the collected page content.
    pub fn with_captions(transcript: &str, markdown: &str) -> String {
        Self::with_heading(CAPTION_HEADING, transcript, markdown)
    }

    /// Same as `with_captions` but with a caller-supplied heading.
    pub fn with_heading(heading: &str, transcript: &str, markdown: &str) -> String {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            markdown.to_string()
        } else {
            format!("{}\n{}\n\n{}", heading, transcript, markdown)
        }
    }
}

/*!
 * Tests for WebVTT caption text extraction
 */

use vttscribe::caption_extractor::CaptionExtractor;

/// Test a full track with header, indices, timings, and a repeated cue
#[test]
fn test_extract_withDuplicateCues_shouldCollapseToSingleLine() {
    let track = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\nHello world\n\n2\n00:00:02.000 --> 00:00:03.000\nHello world\n";
    assert_eq!(CaptionExtractor::extract(track), "Hello world");
}

/// Test empty input
#[test]
fn test_extract_withEmptyInput_shouldReturnEmptyString() {
    assert_eq!(CaptionExtractor::extract(""), "");
}

/// Test absent input
#[test]
fn test_extract_optional_withNone_shouldReturnEmptyString() {
    assert_eq!(CaptionExtractor::extract_optional(None), "");
    assert_eq!(
        CaptionExtractor::extract_optional(Some("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi\n")),
        "Hi"
    );
}

/// Test NOTE comment block suppression
#[test]
fn test_extract_withNoteBlock_shouldSuppressOpeningLine() {
    let track = "WEBVTT\n\nNOTE This is a comment\n\n1\n00:00:01.000 --> 00:00:02.000\nLine A\n";
    assert_eq!(CaptionExtractor::extract(track), "Line A");
}

/// NOTE/STYLE filtering only covers the opening line; continuation lines of a
/// multi-line block are kept as cue text
#[test]
fn test_extract_withMultiLineNoteBlock_shouldKeepContinuationLines() {
    let track = "WEBVTT\n\nNOTE first comment line\nsecond comment line\n\n00:00:01.000 --> 00:00:02.000\nLine A\n";
    assert_eq!(CaptionExtractor::extract(track), "second comment line\nLine A");
}

/// Test STYLE block opener suppression
#[test]
fn test_extract_withStyleBlock_shouldSuppressOpeningLine() {
    let track = "WEBVTT\n\nSTYLE\n::cue { color: red }\n\n00:00:01.000 --> 00:00:02.000\nLine A\n";
    let result = CaptionExtractor::extract(track);
    assert!(!result.contains("STYLE"));
    assert!(result.contains("Line A"));
}

/// Test HTML-like tag stripping
#[test]
fn test_extract_withMarkupTags_shouldStripTags() {
    let track = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:02.000\n<b>Bold</b> text\n";
    assert_eq!(CaptionExtractor::extract(track), "Bold text");
}

/// Test BOM prefix handling
#[test]
fn test_extract_withBomPrefix_shouldStripBomAndHeader() {
    let track = "\u{FEFF}WEBVTT\n\n1\n00:00:00.500 --> 00:00:01.500\nCaption one\n";
    assert_eq!(CaptionExtractor::extract(track), "Caption one");
}

/// Test BOM-only input
#[test]
fn test_extract_withBomOnly_shouldReturnEmptyString() {
    assert_eq!(CaptionExtractor::extract("\u{FEFF}"), "");
}

/// Test CRLF line separators
#[test]
fn test_extract_withCrlfSeparators_shouldNotRetainCarriageReturns() {
    let track = "WEBVTT\r\n\r\n1\r\n00:00:01.000 --> 00:00:02.000\r\nFirst line\r\n\r\n2\r\n00:00:02.000 --> 00:00:03.000\r\nSecond line\r\n";
    assert_eq!(CaptionExtractor::extract(track), "First line\nSecond line");
}

/// Test case-insensitive header matching
#[test]
fn test_extract_withLowercaseHeader_shouldSuppressHeader() {
    let track = "webvtt\n\n00:00:01.000 --> 00:00:02.000\nText\n";
    assert_eq!(CaptionExtractor::extract(track), "Text");
}

/// A WEBVTT-prefixed line that is not the first line is ordinary cue text
#[test]
fn test_extract_withHeaderTokenPastFirstLine_shouldKeepLine() {
    let track = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nWEBVTT is a caption format\n";
    assert_eq!(CaptionExtractor::extract(track), "WEBVTT is a caption format");
}

/// Test timing lines with trailing cue settings
#[test]
fn test_extract_withCueSettings_shouldDiscardWholeTimingLine() {
    let track = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000 align:start position:10%\nAligned text\n";
    assert_eq!(CaptionExtractor::extract(track), "Aligned text");
}

/// Test timing lines with an hours group (one and two digits)
#[test]
fn test_extract_withHoursInTiming_shouldDiscardTimingLine() {
    let track = "WEBVTT\n\n1:00:01.000 --> 1:00:02.000\nOne digit hours\n\n01:00:03.000 --> 01:00:04.000\nTwo digit hours\n";
    assert_eq!(
        CaptionExtractor::extract(track),
        "One digit hours\nTwo digit hours"
    );
}

/// A timing-like line without milliseconds does not match the timing rule
/// and survives as cue text
#[test]
fn test_extract_withTimingMissingMillis_shouldKeepLineAsText() {
    let track = "WEBVTT\n\n00:01 --> 00:05\nActual text\n";
    assert_eq!(CaptionExtractor::extract(track), "00:01 --> 00:05\nActual text");
}

/// Test global deduplication across non-adjacent positions
#[test]
fn test_extract_withNonAdjacentDuplicates_shouldKeepFirstOccurrenceOnly() {
    let track = "WEBVTT\n\n\
        00:00:01.000 --> 00:00:02.000\nAlpha\n\n\
        00:00:02.000 --> 00:00:03.000\nBeta\n\n\
        00:00:03.000 --> 00:00:04.000\nGamma\n\n\
        00:00:04.000 --> 00:00:05.000\nAlpha\n\n\
        00:00:05.000 --> 00:00:06.000\nBeta\n";
    assert_eq!(CaptionExtractor::extract(track), "Alpha\nBeta\nGamma");
}

/// Two cues with different raw markup but identical rendered text are duplicates
#[test]
fn test_extract_withMarkupVariants_shouldDeduplicateOnStrippedText() {
    let track = "WEBVTT\n\n\
        00:00:01.000 --> 00:00:02.000\n<b>Same</b> words\n\n\
        00:00:02.000 --> 00:00:03.000\n<i>Same</i>   words\n";
    assert_eq!(CaptionExtractor::extract(track), "Same words");
}

/// A cue line that is only markup contributes no visible text and is dropped
#[test]
fn test_extract_withTagOnlyLine_shouldDropLine() {
    let track = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n<c.colorE5E5E5>\n\n00:00:02.000 --> 00:00:03.000\nVisible\n";
    assert_eq!(CaptionExtractor::extract(track), "Visible");
}

/// Re-running the extractor on a track built by duplicating every cue must
/// produce the same transcript (dedup idempotence)
#[test]
fn test_extract_withEveryCueDuplicated_shouldMatchOriginalTranscript() {
    let track = "WEBVTT\n\n\
        00:00:01.000 --> 00:00:02.000\nFirst\n\n\
        00:00:02.000 --> 00:00:03.000\nSecond\n\n\
        00:00:03.000 --> 00:00:04.000\nThird\n";
    let transcript = CaptionExtractor::extract(track);

    let mut doubled = String::from("WEBVTT\n");
    for (i, line) in transcript.lines().enumerate() {
        for repeat in 0..2 {
            doubled.push_str(&format!(
                "\n00:00:0{}.{}00 --> 00:00:0{}.500\n{}\n",
                i + 1,
                repeat,
                i + 1,
                line
            ));
        }
    }

    assert_eq!(CaptionExtractor::extract(&doubled), transcript);
}

/// Order of first-seen distinct cue lines is preserved
#[test]
fn test_extract_withInterleavedRepeats_shouldPreserveFirstSeenOrder() {
    let track = "WEBVTT\n\n\
        00:00:01.000 --> 00:00:02.000\nZebra\n\n\
        00:00:02.000 --> 00:00:03.000\nApple\n\n\
        00:00:03.000 --> 00:00:04.000\nZebra\n\n\
        00:00:04.000 --> 00:00:05.000\nMango\n";
    assert_eq!(CaptionExtractor::extract(track), "Zebra\nApple\nMango");
}

/// Arbitrary non-VTT text never panics and falls through as cue text
#[test]
fn test_extract_withArbitraryText_shouldReturnWithoutPanic() {
    let garbage = "<<<>>> not vtt at all\n12ab\n\u{0000}\u{FFFD}\n";
    let result = CaptionExtractor::extract(garbage);
    assert!(!result.is_empty());

    // Unterminated tags strip lexically, possibly over-aggressively
    let unterminated = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n<b unclosed tag\n";
    let _ = CaptionExtractor::extract(unterminated);
}

/// Test the header predicate
#[test]
fn test_is_header_line_withVariants_shouldMatchCaseInsensitively() {
    assert!(CaptionExtractor::is_header_line("WEBVTT"));
    assert!(CaptionExtractor::is_header_line("webvtt"));
    assert!(CaptionExtractor::is_header_line("WEBVTT - some title"));
    assert!(!CaptionExtractor::is_header_line("VTT"));
    assert!(!CaptionExtractor::is_header_line("a WEBVTT"));
}

/// Test the NOTE opener predicate
#[test]
fn test_is_note_opener_withVariants_shouldRequireBoundary() {
    assert!(CaptionExtractor::is_note_opener("NOTE"));
    assert!(CaptionExtractor::is_note_opener("NOTE some comment"));
    assert!(CaptionExtractor::is_note_opener("note lowercase"));
    assert!(!CaptionExtractor::is_note_opener("NOTEWORTHY remark"));
}

/// Test the STYLE opener predicate
#[test]
fn test_is_style_opener_withVariants_shouldRequireBoundary() {
    assert!(CaptionExtractor::is_style_opener("STYLE"));
    assert!(CaptionExtractor::is_style_opener("style "));
    assert!(!CaptionExtractor::is_style_opener("STYLESHEET"));
}

/// Test the cue index predicate
#[test]
fn test_is_cue_index_withVariants_shouldMatchDigitsOnly() {
    assert!(CaptionExtractor::is_cue_index("1"));
    assert!(CaptionExtractor::is_cue_index("042"));
    assert!(!CaptionExtractor::is_cue_index("1a"));
    assert!(!CaptionExtractor::is_cue_index("1 2"));
    assert!(!CaptionExtractor::is_cue_index("-1"));
}

/// Test the cue timing predicate
#[test]
fn test_is_cue_timing_withVariants_shouldMatchTimingPrefix() {
    assert!(CaptionExtractor::is_cue_timing("00:00:01.000 --> 00:00:02.000"));
    assert!(CaptionExtractor::is_cue_timing("00:01.000 --> 00:02.000"));
    assert!(CaptionExtractor::is_cue_timing("1:02:03.456 --> 1:02:04.000 align:start"));
    assert!(!CaptionExtractor::is_cue_timing("00:00:01 --> 00:00:02"));
    assert!(!CaptionExtractor::is_cue_timing("not a timing"));
    assert!(!CaptionExtractor::is_cue_timing("00:00:01.000 00:00:02.000"));
}

/// Test markup stripping and whitespace collapsing
#[test]
fn test_strip_markup_withNestedTags_shouldCollapseWhitespace() {
    assert_eq!(
        CaptionExtractor::strip_markup("<v Roger>Hello   <b>there</b>"),
        "Hello there"
    );
    assert_eq!(CaptionExtractor::strip_markup("<c></c>"), "");
    assert_eq!(CaptionExtractor::strip_markup("plain"), "plain");
}

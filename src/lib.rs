/*!
 * # vttscribe
 *
 * A Rust library and CLI for turning WebVTT caption tracks into clean,
 * deduplicated plain-text transcripts.
 *
 * ## Features
 *
 * - Extract plain text from WebVTT tracks (header, NOTE/STYLE openers, cue
 *   indices, and timing lines removed; markup stripped; duplicates collapsed)
 * - Best-effort, never-failing extraction: malformed tracks degrade to an
 *   empty transcript instead of erroring
 * - Fetch remote caption tracks over HTTP(S)
 * - Combine a transcript with page Markdown under a "Video caption:" heading
 * - Batch extraction across directories of .vtt files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `caption_extractor`: The core WebVTT-to-plain-text transform
 * - `caption_fetcher`: HTTP client for remote caption tracks
 * - `content_builder`: Final content assembly (transcript + page Markdown)
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_extractor;
pub mod caption_fetcher;
pub mod content_builder;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ExtractionRequest};
pub use caption_extractor::CaptionExtractor;
pub use caption_fetcher::CaptionFetcher;
pub use content_builder::{ContentBuilder, CAPTION_HEADING};
pub use errors::{AppError, FetchError};

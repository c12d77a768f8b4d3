use anyhow::{Result, anyhow};
use log::{info, warn, debug};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::app_config::Config;
use crate::caption_extractor::CaptionExtractor;
use crate::caption_fetcher::CaptionFetcher;
use crate::content_builder::ContentBuilder;
use crate::file_utils::FileManager;

// @module: Application controller for transcript extraction

/// A single extraction request as assembled from the command line
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Caption source: a .vtt file, a directory of .vtt files, or an http(s) URL
    pub input: String,

    /// Explicit output path (ignored in directory mode)
    pub output: Option<PathBuf>,

    /// Print the transcript to stdout instead of writing a file
    pub to_stdout: bool,

    /// Overwrite existing output files
    pub force_overwrite: bool,

    /// Optional page Markdown to combine with the transcript
    pub page_file: Option<PathBuf>,
}

/// Main application controller for caption transcript extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run a single extraction request end to end.
    pub async fn run(&self, request: &ExtractionRequest) -> Result<()> {
        if CaptionFetcher::is_caption_url(&request.input) {
            return self.run_url(request).await;
        }

        let input_path = Path::new(&request.input);
        if FileManager::dir_exists(input_path) {
            return self.run_directory(input_path, request).await;
        }
        if FileManager::file_exists(input_path) {
            let raw_track = FileManager::read_to_string(input_path)?;
            let transcript = CaptionExtractor::extract(&raw_track);
            let default_output =
                FileManager::generate_transcript_path(input_path, &self.config.output_extension);
            return self.deliver(&transcript, default_output, request);
        }

        Err(anyhow!(
            "Input not found (expected a .vtt file, a directory, or an http(s) URL): {}",
            request.input
        ))
    }

    /// Fetch a remote caption track and deliver its transcript.
    async fn run_url(&self, request: &ExtractionRequest) -> Result<()> {
        let fetcher =
            CaptionFetcher::with_timeout(Duration::from_secs(self.config.request_timeout_secs));
        let raw_track = fetcher.fetch(&request.input).await?;
        let transcript = CaptionExtractor::extract(&raw_track);

        let default_output = Self::transcript_path_for_url(&request.input, &self.config.output_extension);
        self.deliver(&transcript, default_output, request)
    }

    /// Extract every .vtt file found under a directory, writing each
    /// transcript next to its source track.
    async fn run_directory(&self, dir: &Path, request: &ExtractionRequest) -> Result<()> {
        if request.output.is_some() {
            warn!("Ignoring --output in directory mode; transcripts are written next to their tracks");
        }

        let tracks = FileManager::find_files(dir, "vtt")?;
        if tracks.is_empty() {
            warn!("No .vtt caption tracks found under {:?}", dir);
            return Ok(());
        }

        info!("Found {} caption track(s) under {:?}", tracks.len(), dir);

        let per_file = ExtractionRequest {
            output: None,
            ..request.clone()
        };
        for track in tracks {
            debug!("Processing caption track {:?}", track);
            let raw_track = FileManager::read_to_string(&track)?;
            let transcript = CaptionExtractor::extract(&raw_track);
            let default_output =
                FileManager::generate_transcript_path(&track, &self.config.output_extension);
            self.deliver(&transcript, default_output, &per_file)?;
        }

        Ok(())
    }

    /// Assemble the final content and write or print it.
    fn deliver(
        &self,
        transcript: &str,
        default_output: PathBuf,
        request: &ExtractionRequest,
    ) -> Result<()> {
        let content = match &request.page_file {
            Some(page_file) => {
                let markdown = FileManager::read_to_string(page_file)?;
                ContentBuilder::with_heading(&self.config.caption_heading, transcript, &markdown)
            }
            None => transcript.to_string(),
        };

        if content.trim().is_empty() {
            warn!("No caption text found, nothing to write");
            return Ok(());
        }

        if request.to_stdout {
            println!("{}", content);
            return Ok(());
        }

        let output_path = request.output.clone().unwrap_or(default_output);
        if FileManager::file_exists(&output_path) && !request.force_overwrite {
            warn!(
                "Output file already exists, skipping (use --force-overwrite to replace): {:?}",
                output_path
            );
            return Ok(());
        }

        FileManager::write_to_file(&output_path, &content)?;
        info!("Wrote transcript to {:?}", output_path);
        Ok(())
    }

    /// Derive a transcript filename from the last path segment of a caption URL.
    fn transcript_path_for_url(caption_url: &str, extension: &str) -> PathBuf {
        let stem = Url::parse(caption_url)
            .ok()
            .and_then(|parsed| {
                parsed
                    .path_segments()
                    .and_then(|segments| segments.last().map(|s| s.to_string()))
            })
            .map(|segment| {
                Path::new(&segment)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or(segment)
            })
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "captions".to_string());

        PathBuf::from(format!("{}.{}", stem, extension.trim_start_matches('.')))
    }
}

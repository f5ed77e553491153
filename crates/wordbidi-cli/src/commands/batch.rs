//! Batch command implementation
//!
//! Processes jobs from a JSONL file, writing one JSON result per job to stdout.
//! A job carries either `words` (mapped like the words command) or `text`
//! (reordered like the vis command).

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use serde::{Deserialize, Serialize};
use wordbidi::config::Config;
use wordbidi::types::WordCorrespondence;
use wordbidi::{DirectionSpec, Result, WordBidiError, WordMapper};

use super::write_json_line;
use crate::cli::BatchArgs;

/// JSONL job specification
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchJob {
    /// Echoed back in the result
    #[serde(default)]
    id: Option<String>,
    /// Words in logical order
    #[serde(default)]
    words: Option<Vec<String>>,
    /// Text to reorder
    #[serde(default)]
    text: Option<String>,
    /// Direction name, defaults to the configured one
    #[serde(default)]
    direction: Option<String>,
    /// Strip bidi marks, defaults to the configured setting
    #[serde(default)]
    clean: Option<bool>,
}

#[derive(Debug, Serialize)]
struct BatchResult {
    id: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<WordCorrespondence>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl BatchResult {
    fn failed(id: String, error: impl ToString) -> Self {
        Self {
            id,
            status: "error",
            words: None,
            visual: None,
            error: Some(error.to_string()),
        }
    }
}

pub fn run(args: &BatchArgs, config: &Config) -> Result<()> {
    let reader: Box<dyn BufRead> = if let Some(ref input_path) = args.input {
        Box::new(BufReader::new(File::open(input_path)?))
    } else {
        if !args.quiet {
            eprintln!("Reading jobs from stdin...");
        }
        Box::new(BufReader::new(io::stdin()))
    };

    let mapper = WordMapper::from_config(wordbidi::default_engine(), config);
    let mut out = io::stdout().lock();
    let mut job_count = 0;
    let mut error_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;
        let fallback_id = format!("line-{}", line_num + 1);

        let result = match serde_json::from_str::<BatchJob>(&line) {
            Ok(job) => {
                let id = job.id.clone().unwrap_or(fallback_id);
                match process_job(&job, &mapper, config) {
                    Ok(result) => BatchResult { id, ..result },
                    Err(e) => BatchResult::failed(id, e),
                }
            },
            Err(e) => BatchResult::failed(fallback_id, format!("invalid job: {e}")),
        };

        if result.status == "error" {
            error_count += 1;
            log::warn!(
                "job {} failed: {}",
                result.id,
                result.error.as_deref().unwrap_or_default()
            );
        }
        write_json_line(&mut out, &result)?;
    }

    if !args.quiet {
        eprintln!("Batch processing complete:");
        eprintln!("  Total jobs: {}", job_count);
        eprintln!("  Successful: {}", job_count - error_count);
        eprintln!("  Failed: {}", error_count);
    }

    if error_count > 0 {
        Err(WordBidiError::InvalidArgument(format!(
            "{error_count} of {job_count} jobs failed"
        )))
    } else {
        Ok(())
    }
}

fn process_job(job: &BatchJob, mapper: &WordMapper, config: &Config) -> Result<BatchResult> {
    let direction = job
        .direction
        .as_deref()
        .map_or(DirectionSpec::Value(config.direction), DirectionSpec::from);
    let clean = job.clean.unwrap_or(config.clean);

    let (words, visual) = match (&job.words, &job.text) {
        (Some(words), None) => {
            let mapped = mapper.map_words(words, direction, clean)?;
            (Some(mapped), None)
        },
        (None, Some(text)) => {
            let options = config.reorder_options().clean(clean);
            let reordered = wordbidi::log2vis(text, direction, &options)?;
            (None, Some(reordered.visual))
        },
        (Some(_), Some(_)) => {
            return Err(WordBidiError::InvalidArgument(
                "job has both words and text".into(),
            ))
        },
        (None, None) => {
            return Err(WordBidiError::InvalidArgument(
                "job needs words or text".into(),
            ))
        },
    };

    Ok(BatchResult {
        id: String::new(),
        status: "ok",
        words,
        visual,
        error: None,
    })
}

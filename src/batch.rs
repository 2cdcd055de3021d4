//! # Batch Processing
//!
//! Tokenizes a list of source files and writes one report per file. Each file is an
//! independent unit of work: a file that cannot be read, tokenized or written produces a
//! [`BatchError`] in its slot of the [`BatchSummary`] and no report, while the other files
//! are processed normally.
//!
//! Files run concurrently on the tokio runtime, at most
//! [`BatchConfig::max_concurrency`](crate::config::BatchConfig::max_concurrency) at a time.
//! Outcomes are always returned in input order.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::{
    config::{BatchConfig, RatlexConfig},
    report,
    tokenizer::token::{LexError, TokenStream, Tokenizer},
};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to tokenize {}: {source}", .path.display())]
    Lex {
        path: PathBuf,
        #[source]
        source: LexError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("processing of {} did not complete: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}

impl BatchError {
    /// The file this error concerns: the report for write failures, the input otherwise.
    pub fn path(&self) -> &Path {
        match self {
            BatchError::Read { path, .. }
            | BatchError::Lex { path, .. }
            | BatchError::Write { path, .. }
            | BatchError::Task { path, .. } => path,
        }
    }
}

pub type BatchResult<T> = Result<T, BatchError>;

/// A successfully processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tokens: TokenStream,
}

/// Outcomes of a batch run, one per input in input order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    outcomes: Vec<BatchResult<FileReport>>,
}

impl BatchSummary {
    pub fn outcomes(&self) -> &[BatchResult<FileReport>] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<BatchResult<FileReport>> {
        self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &FileReport> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Path of the report for `input`: the configured prefix plus the input's file name, in
/// the configured output directory or next to the input.
pub fn output_path(input: &Path, config: &BatchConfig) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{}{}", config.output_prefix, file_name))
}

/// Reads, tokenizes and reports a single file.
#[tracing::instrument(level = "debug", skip(tokenizer, config))]
pub async fn process_file(
    tokenizer: &Tokenizer,
    input: &Path,
    config: &RatlexConfig,
) -> BatchResult<FileReport> {
    let source = tokio::fs::read_to_string(input)
        .await
        .map_err(|source| BatchError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    let tokens = tokenizer
        .tokenize(&source)
        .map_err(|source| BatchError::Lex {
            path: input.to_path_buf(),
            source,
        })?;

    let output = output_path(input, &config.batch);
    let rendered = report::render(&tokens, &config.report);
    tokio::fs::write(&output, rendered)
        .await
        .map_err(|source| BatchError::Write {
            path: output.clone(),
            source,
        })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        tokens = tokens.len(),
        "wrote token report"
    );

    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        tokens,
    })
}

/// Runs batches of files against one shared configuration.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    tokenizer: Tokenizer,
    config: Arc<RatlexConfig>,
}

impl BatchProcessor {
    pub fn new(config: RatlexConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RatlexConfig {
        &self.config
    }

    pub async fn process_file(&self, input: &Path) -> BatchResult<FileReport> {
        process_file(&self.tokenizer, input, &self.config).await
    }

    /// Processes every input, isolating failures per file.
    pub async fn run<I>(&self, inputs: I) -> BatchSummary
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let inputs: Vec<PathBuf> = inputs.into_iter().collect();
        let limit = self.config.batch.max_concurrency.max(1);
        debug!(files = inputs.len(), limit, "starting batch");

        let mut slots: Vec<Option<BatchResult<FileReport>>> =
            inputs.iter().map(|_| None).collect();
        let mut pending = inputs.iter().cloned().enumerate();
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < limit {
                let Some((index, input)) = pending.next() else {
                    break;
                };
                let tokenizer = self.tokenizer;
                let config = Arc::clone(&self.config);
                tasks.spawn(async move {
                    let outcome = process_file(&tokenizer, &input, &config).await;
                    (index, outcome)
                });
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            match joined {
                Ok((index, outcome)) => {
                    if let Err(e) = &outcome {
                        warn!(error = %e, "file failed");
                    }
                    slots[index] = Some(outcome);
                }
                Err(e) => error!(error = %e, "batch worker did not complete"),
            }
        }

        let outcomes = slots
            .into_iter()
            .zip(inputs)
            .map(|(slot, input)| {
                slot.unwrap_or_else(|| {
                    Err(BatchError::Task {
                        path: input,
                        message: "worker panicked or was cancelled".to_string(),
                    })
                })
            })
            .collect();

        BatchSummary { outcomes }
    }
}

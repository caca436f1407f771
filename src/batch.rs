//! Batch conversion over a folder of DDS files
//!
//! A batch is a sequence of independent single-file conversions sharing one
//! format configuration. Files are processed in lexicographic order; a file
//! that fails to convert is recorded and the batch moves on. Progress is
//! published as immutable snapshots over a channel rather than through a
//! shared mutable counter, and the background run hands back a joinable,
//! cancellable handle instead of a fire-and-forget thread.

use crate::convert::{self, OutputFormat};
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// Settings shared by every file in one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Folder scanned (non-recursively) for `.dds` files
    pub input_dir: PathBuf,
    /// Folder the converted images are written into
    pub output_dir: PathBuf,
    /// Target format applied to every file
    pub format: OutputFormat,
}

/// Immutable progress snapshot, published once before the first file and
/// once after each processed file
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// Files processed so far, successfully or not
    pub completed: usize,
    /// Total matching files in the batch
    pub total: usize,
    /// Message of the most recent per-file error, if any
    pub last_error: Option<String>,
}

impl ProgressSnapshot {
    /// Percent complete; an empty batch reports 100
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.completed as f64 * 100.0 / self.total as f64
        }
    }
}

/// Final state of a finished batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Number of matching files found
    pub total: usize,
    /// Output paths written, in processing order
    pub converted: Vec<PathBuf>,
    /// Every per-file failure, with the source path it belongs to
    pub errors: Vec<(PathBuf, String)>,
    /// Whether the run stopped early on request
    pub cancelled: bool,
}

impl BatchOutcome {
    /// True when every file converted and the run was not cancelled
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && !self.cancelled
    }
}

/// Handle to a batch running on a background thread
pub struct BatchHandle {
    thread: JoinHandle<Result<BatchOutcome>>,
    cancel: Arc<AtomicBool>,
}

impl BatchHandle {
    /// Request a cooperative stop; takes effect between files
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the batch to finish and return its outcome
    pub fn join(self) -> Result<BatchOutcome> {
        self.thread
            .join()
            .unwrap_or(Err(ConvertError::WorkerPanicked))
    }
}

/// Start a batch on a background thread, publishing snapshots on `sender`.
///
/// The sender side is dropped when the run finishes, so iterating the
/// receiver doubles as waiting for completion.
pub fn spawn(config: BatchConfig, sender: Sender<ProgressSnapshot>) -> BatchHandle {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let thread = thread::spawn(move || {
        let mut publish = |snapshot: ProgressSnapshot| {
            // The receiver may have hung up; progress delivery is best-effort
            let _ = sender.send(snapshot);
        };
        run_inner(&config, &mut publish, Some(&flag))
    });
    BatchHandle { thread, cancel }
}

/// Run a batch synchronously, calling `observer` after each processed file.
pub fn run(config: &BatchConfig, mut observer: impl FnMut(ProgressSnapshot)) -> Result<BatchOutcome> {
    run_inner(config, &mut observer, None)
}

fn run_inner(
    config: &BatchConfig,
    observer: &mut dyn FnMut(ProgressSnapshot),
    cancel: Option<&AtomicBool>,
) -> Result<BatchOutcome> {
    let files = enumerate_dds(&config.input_dir)?;
    let total = files.len();
    log::info!(
        "batch: {total} file(s) in {}",
        config.input_dir.display()
    );

    let mut outcome = BatchOutcome {
        total,
        converted: Vec::new(),
        errors: Vec::new(),
        cancelled: false,
    };
    let mut last_error = None;

    observer(ProgressSnapshot {
        completed: 0,
        total,
        last_error: None,
    });

    for file in files {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::info!("batch cancelled after {} file(s)", outcome.converted.len());
            outcome.cancelled = true;
            break;
        }

        match convert::convert_file(&file, &config.output_dir, config.format) {
            Ok(output) => outcome.converted.push(output),
            Err(e) => {
                let message = e.to_string();
                log::warn!("failed to convert {}: {message}", file.display());
                last_error = Some(message.clone());
                outcome.errors.push((file, message));
            }
        }

        observer(ProgressSnapshot {
            completed: outcome.converted.len() + outcome.errors.len(),
            total,
            last_error: last_error.clone(),
        });
    }

    Ok(outcome)
}

/// List the DDS files of one folder, sorted lexicographically.
///
/// Directory listing order is filesystem-dependent; sorting keeps batch
/// runs and their progress sequences deterministic.
pub fn enumerate_dds(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| ConvertError::ReadDir {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && has_dds_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_dds_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("dds"))
}

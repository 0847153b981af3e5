use crate::error::{ConversionError, Result};
use crate::formats::{normalized_extension, webp_file_name, FileKind};
use crate::processing::{convert_to_webp, copy_vector};
use crate::report::{print_banner, print_outcome, print_summary};
use crate::utils::create_progress_bar;
use crate::validation::{prepare_destination, validate_source_dir};
use crate::{info, logger, verbose};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything a run needs, fixed once the command line has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub quality: i32,
}

impl ConversionRequest {
    pub fn new(source_dir: PathBuf, destination_dir: PathBuf, quality: i32) -> Self {
        Self {
            source_dir,
            destination_dir,
            quality,
        }
    }
}

/// One regular file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
    /// Lower-cased, without the dot; empty when the file has none.
    pub extension: String,
    pub size_bytes: u64,
}

impl FileRecord {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = normalized_extension(&path);
        Self {
            path,
            name,
            extension,
            size_bytes,
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(&self.extension)
    }
}

/// A listing entry: either a file we could stat, or one we could not.
#[derive(Debug)]
pub enum SourceEntry {
    File(FileRecord),
    Unreadable { name: String, message: String },
}

impl SourceEntry {
    pub fn name(&self) -> &str {
        match self {
            SourceEntry::File(record) => &record.name,
            SourceEntry::Unreadable { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Converting,
    Copying,
    Reading,
}

impl Action {
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Converting => "converting",
            Action::Copying => "copying",
            Action::Reading => "reading",
        }
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Converted {
        name: String,
        output_name: String,
        original_size: u64,
        converted_size: u64,
    },
    Copied {
        name: String,
    },
    Skipped {
        name: String,
        silent: bool,
    },
    Failed {
        name: String,
        action: Action,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub copied: usize,
    pub skipped: usize,
}

impl RunSummary {
    /// Failures count as skipped.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::Copied { .. } => self.copied += 1,
            FileOutcome::Skipped { .. } | FileOutcome::Failed { .. } => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.copied + self.skipped
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Symlinks are followed; directories and other non-regular entries are left
/// out. An entry that cannot be stat'ed is returned as
/// [`SourceEntry::Unreadable`] so the caller can count it. Failing to read
/// `dir` itself is an error.
pub fn collect_source_files(dir: &Path) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(ConversionError::WalkdirError(err)),
            Err(err) => {
                let name = err
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push(SourceEntry::Unreadable {
                    name,
                    message: err.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => entries.push(SourceEntry::File(FileRecord::new(
                entry.into_path(),
                metadata.len(),
            ))),
            Err(err) => entries.push(SourceEntry::Unreadable {
                name: entry.file_name().to_string_lossy().into_owned(),
                message: err.to_string(),
            }),
        }
    }

    Ok(entries)
}

/// Classifies one entry and applies its action. Never fails: errors become
/// [`FileOutcome::Failed`].
pub fn process_entry(entry: &SourceEntry, request: &ConversionRequest) -> FileOutcome {
    let record = match entry {
        SourceEntry::File(record) => record,
        SourceEntry::Unreadable { name, message } => {
            return FileOutcome::Failed {
                name: name.clone(),
                action: Action::Reading,
                message: message.clone(),
            }
        }
    };

    verbose!("{} classified as {}", record.name, record.kind());
    match record.kind() {
        FileKind::Raster => {
            let output_name = webp_file_name(&record.path);
            let output_path = request.destination_dir.join(&output_name);
            match convert_to_webp(&record.path, &output_path, request.quality) {
                Ok(converted_size) => FileOutcome::Converted {
                    name: record.name.clone(),
                    output_name,
                    original_size: record.size_bytes,
                    converted_size,
                },
                Err(e) => FileOutcome::Failed {
                    name: record.name.clone(),
                    action: Action::Converting,
                    message: e.to_string(),
                },
            }
        }
        FileKind::Vector => {
            let file_name = record.path.file_name().unwrap_or_default();
            let output_path = request.destination_dir.join(file_name);
            match copy_vector(&record.path, &output_path) {
                Ok(_) => FileOutcome::Copied {
                    name: record.name.clone(),
                },
                Err(e) => FileOutcome::Failed {
                    name: record.name.clone(),
                    action: Action::Copying,
                    message: e.to_string(),
                },
            }
        }
        FileKind::Other { silent } => FileOutcome::Skipped {
            name: record.name.clone(),
            silent,
        },
    }
}

/// Runs the whole conversion: banner, pre-flight checks, the per-file loop and
/// the summary.
///
/// With `jobs <= 1` files are processed and reported one at a time. With more
/// jobs they are processed on a dedicated rayon pool and reported afterwards,
/// still in name order.
///
/// # Errors
/// Only pre-flight problems are returned: a missing or non-directory source, a
/// destination that cannot be created, an unreadable source listing, or a pool
/// that cannot be built. Per-file failures are reported and counted as skipped.
pub fn convert_directory(request: &ConversionRequest, jobs: usize) -> Result<RunSummary> {
    print_banner(request);

    validate_source_dir(&request.source_dir)?;
    prepare_destination(&request.destination_dir)?;
    info!("\n✓ Output directory ready");

    let entries = collect_source_files(&request.source_dir)?;
    verbose!("found {} files", entries.len());
    info!("\nProcessing images...\n");

    let pb = create_progress_bar(entries.len() as u64, logger::is_quiet());
    logger::attach_progress(&pb);

    let result = if jobs <= 1 {
        Ok(process_sequential(&entries, request, |name| {
            pb.set_message(name.to_string());
            pb.inc(1);
        }))
    } else {
        process_parallel(&entries, request, jobs, || pb.inc(1))
    };

    pb.finish_and_clear();
    logger::detach_progress();

    let summary = result?;
    verbose!("{} of {} files written", summary.converted + summary.copied, summary.total());
    print_summary(&summary, &request.destination_dir);
    Ok(summary)
}

fn process_sequential<F>(
    entries: &[SourceEntry],
    request: &ConversionRequest,
    on_done: F,
) -> RunSummary
where
    F: Fn(&str),
{
    let mut summary = RunSummary::default();
    for entry in entries {
        let outcome = process_entry(entry, request);
        print_outcome(&outcome);
        summary.record(&outcome);
        on_done(entry.name());
    }
    summary
}

fn process_parallel<F>(
    entries: &[SourceEntry],
    request: &ConversionRequest,
    jobs: usize,
    on_done: F,
) -> Result<RunSummary>
where
    F: Fn() + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let results = process_on_pool(&pool, entries, request, on_done);

    let mut summary = RunSummary::default();
    for (outcome, details) in &results {
        for line in details {
            info!("{}", line);
        }
        print_outcome(outcome);
        summary.record(outcome);
    }
    Ok(summary)
}

/// Processes every entry on `pool`. Each outcome comes back with the lines the
/// worker logged for it, in listing order (`collect` keeps the input order).
fn process_on_pool<F>(
    pool: &rayon::ThreadPool,
    entries: &[SourceEntry],
    request: &ConversionRequest,
    on_done: F,
) -> Vec<(FileOutcome, Vec<String>)>
where
    F: Fn() + Sync,
{
    pool.install(|| {
        entries
            .par_iter()
            .map(|entry| {
                let result = logger::capture(|| process_entry(entry, request));
                on_done();
                result
            })
            .collect()
    })
}

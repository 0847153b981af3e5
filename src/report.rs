//! Human-readable run output: banner, one entry per file, summary block.

use crate::batch::{ConversionRequest, FileOutcome, RunSummary};
use crate::constants::{
    BANNER_TITLE, BANNER_WIDTH, FAILURE_PREFIX, SKIP_PREFIX, SUCCESS_PREFIX,
};
use crate::utils::{calculate_savings, format_kb};
use crate::{error, info, logger};
use std::path::Path;

fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub fn print_banner(request: &ConversionRequest) {
    info!("{}", rule());
    info!("{}", BANNER_TITLE);
    info!("{}", rule());
    info!("\nSource:      {}", request.source_dir.display());
    info!("Destination: {}", request.destination_dir.display());
    info!("Quality:     {}", request.quality);
}

/// The line(s) printed for one file, or `None` for silent skips.
pub fn outcome_lines(outcome: &FileOutcome) -> Option<Vec<String>> {
    let lines = match outcome {
        FileOutcome::Converted {
            name,
            output_name,
            original_size,
            converted_size,
        } => {
            let savings = calculate_savings(*original_size, *converted_size);
            vec![
                format!("  {} {} -> {}", SUCCESS_PREFIX, name, output_name),
                format!(
                    "      {} -> {} ({:.1}% smaller)",
                    format_kb(*original_size),
                    format_kb(*converted_size),
                    savings
                ),
            ]
        }
        FileOutcome::Copied { name } => {
            vec![format!("  {} {} (copied as-is)", SUCCESS_PREFIX, name)]
        }
        FileOutcome::Skipped { silent: true, .. } => return None,
        FileOutcome::Skipped { name, .. } => {
            vec![format!("  {} {} (skipped)", SKIP_PREFIX, name)]
        }
        FileOutcome::Failed {
            name,
            action,
            message,
        } => vec![format!(
            "  {} Error {} {}: {}",
            FAILURE_PREFIX,
            action.verb(),
            name,
            message
        )],
    };
    Some(lines)
}

/// Per-file failures still reach stderr in quiet mode.
pub fn print_outcome(outcome: &FileOutcome) {
    let Some(lines) = outcome_lines(outcome) else {
        return;
    };

    if logger::is_quiet() {
        if let FileOutcome::Failed {
            name,
            action,
            message,
        } = outcome
        {
            error!("Error {} {}: {}", action.verb(), name, message);
        }
        return;
    }

    for line in lines {
        info!("{}", line);
    }
}

pub fn print_summary(summary: &RunSummary, destination: &Path) {
    info!("\n{}", rule());
    info!("SUMMARY");
    info!("{}", rule());
    info!("  Converted to WebP: {}", summary.converted);
    info!("  SVGs copied:       {}", summary.copied);
    info!("  Skipped:           {}", summary.skipped);
    info!("  Output directory:  {}", destination.display());
    info!("{}", rule());
}

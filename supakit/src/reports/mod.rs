//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod extract;
mod generate;
mod output;
mod stripe;
mod workspace;

pub use extract::{ExtractFormat, ExtractReport};
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
pub use stripe::{InitOutcome, StripeReport};
pub use workspace::{AppOutcome, WorkspaceReport};

#[cfg(test)]
pub use output::BufferOutput;

use output::Output;
use supakit_codegen::{GenerateResult, PreviewFile};
use supakit_schema::{Diagnostic, Severity};

/// Files written to disk, or rendered for a dry run.
#[derive(Debug)]
pub enum GenerationResult {
    Written(GenerateResult),
    Preview(Vec<PreviewFile>),
}

/// Print extraction diagnostics. Info messages only show with `verbose`.
fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic], verbose: bool) {
    for diag in diagnostics {
        let text = match &diag.location {
            Some(loc) => format!("{} (at {})", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => out.error(&text),
            Severity::Warning => out.warning(&text),
            Severity::Info if verbose => out.info(&text),
            Severity::Info => {}
        }
    }
}

/// Render either the written file list (paths shown under `base`) or the preview.
fn render_result(out: &mut dyn Output, base: &str, result: &GenerationResult) {
    match result {
        GenerationResult::Written(written) => render_written(out, base, written),
        GenerationResult::Preview(files) => render_preview(out, files),
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}

/// List written and skipped files relative to `base`.
fn render_written(out: &mut dyn Output, base: &str, written: &GenerateResult) {
    let prefix = |path: &str| {
        if base.is_empty() || base == "." {
            path.to_string()
        } else {
            format!("{}/{}", base.trim_end_matches('/'), path)
        }
    };

    if !written.written.is_empty() {
        out.section(&format!("Written ({})", written.written.len()));
        for path in &written.written {
            out.added_item(&prefix(path));
        }
    }

    if !written.skipped.is_empty() {
        out.section(&format!("Kept existing ({})", written.skipped.len()));
        for path in &written.skipped {
            out.skipped_item(&prefix(path));
        }
    }
}

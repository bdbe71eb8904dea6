//! Stripe operation - edge functions and client service.

use std::path::Path;

use eyre::{Result, WrapErr};
use supakit_codegen::{Scaffold, StripeGenerator};

use super::run_tool;
use crate::reports::{GenerationResult, InitOutcome, StripeReport};

/// Options for the stripe operation.
pub struct StripeOptions<'a> {
    /// Project root that holds (or will hold) `supabase/`.
    pub target: &'a Path,
    /// npm scope for `@<scope>/stripe-core`.
    pub scope: String,
    /// Do not run `npx supabase init` when `supabase/` is missing.
    pub skip_init: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the stripe operation.
pub fn stripe(opts: StripeOptions) -> Result<StripeReport> {
    let generator = StripeGenerator::new(opts.scope);
    let functions = generator.functions().to_vec();
    let target = opts.target.to_path_buf();

    if opts.dry_run {
        return Ok(StripeReport {
            target,
            init: InitOutcome::Skipped,
            functions,
            result: GenerationResult::Preview(generator.preview()),
        });
    }

    std::fs::create_dir_all(&target)
        .wrap_err_with(|| format!("failed to create {}", target.display()))?;

    let init = if target.join("supabase").exists() {
        InitOutcome::AlreadyInitialized
    } else if opts.skip_init {
        InitOutcome::Skipped
    } else {
        run_tool(&target, "npx", &["supabase", "init"])
            .wrap_err("failed to initialize the Supabase project")?;
        InitOutcome::Initialized
    };

    let result = generator
        .generate(&target)
        .wrap_err("failed to write Stripe files")?;

    Ok(StripeReport {
        target,
        init,
        functions,
        result: GenerationResult::Written(result),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_existing_project_is_not_reinitialized() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("supabase")).unwrap();

        let report = stripe(StripeOptions {
            target: dir.path(),
            scope: "acme".into(),
            skip_init: false,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(report.init, InitOutcome::AlreadyInitialized);
        assert!(
            dir.path()
                .join("supabase/functions/get-customer-portal/index.ts")
                .exists()
        );
    }

    #[test]
    fn test_skip_init_creates_missing_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("fresh");

        let report = stripe(StripeOptions {
            target: &target,
            scope: "acme".into(),
            skip_init: true,
            dry_run: false,
        })
        .unwrap();

        assert_eq!(report.init, InitOutcome::Skipped);
        assert!(target.join("src/lib/stripe/index.ts").exists());
    }

    #[test]
    fn test_dry_run_leaves_target_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("preview");

        let report = stripe(StripeOptions {
            target: &target,
            scope: "acme".into(),
            skip_init: false,
            dry_run: true,
        })
        .unwrap();

        assert!(!target.exists());
        assert!(matches!(report.result, GenerationResult::Preview(ref files) if files.len() == 8));
    }
}

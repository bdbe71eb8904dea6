//! Stripe command report.

use std::path::PathBuf;

use supakit_codegen::{EdgeFunction, REQUIRED_ENV, handled_event_types};

use super::{
    GenerationResult,
    output::{Output, Report},
    render_result,
};

/// What happened to the Supabase project in the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// `npx supabase init` ran.
    Initialized,
    /// A `supabase/` directory was already there.
    AlreadyInitialized,
    /// Initialization was turned off, or this was a dry run.
    Skipped,
}

/// Report data from Stripe scaffolding.
#[derive(Debug)]
pub struct StripeReport {
    pub target: PathBuf,
    pub init: InitOutcome,
    pub functions: Vec<EdgeFunction>,
    pub result: GenerationResult,
}

impl Report for StripeReport {
    fn render(&self, out: &mut dyn Output) {
        let target = self.target.display().to_string();

        if let GenerationResult::Preview(_) = self.result {
            render_result(out, &target, &self.result);
            return;
        }

        out.key_value("Target", &target);
        let init = match self.init {
            InitOutcome::Initialized => "initialized with npx supabase init",
            InitOutcome::AlreadyInitialized => "already initialized",
            InitOutcome::Skipped => "initialization skipped",
        };
        out.key_value("Supabase", init);
        out.newline();

        render_result(out, &target, &self.result);

        out.newline();
        out.section("Edge functions");
        for function in &self.functions {
            out.list_item(&format!("{}: {}", function.name(), function.description()));
        }

        out.newline();
        out.section("Handled webhook events");
        for event in handled_event_types() {
            out.list_item(event);
        }

        out.newline();
        out.section("Required environment variables");
        for (name, auto_provided) in REQUIRED_ENV {
            if *auto_provided {
                out.list_item(&format!("{} (auto-provided)", name));
            } else {
                out.list_item(name);
            }
        }

        out.newline();
        out.section("Next steps");
        out.numbered_item(1, "Deploy: supabase functions deploy");
        out.numbered_item(
            2,
            "Set secrets: supabase secrets set STRIPE_SECRET_KEY=sk_... STRIPE_WEBHOOK_SECRET=whsec_... FRONTEND_URL=https://...",
        );
        out.numbered_item(
            3,
            "Point the Stripe webhook at https://<project>.supabase.co/functions/v1/stripe-webhook-handler",
        );
    }
}

//! `src/lib/stripe/`: the app-side Stripe service.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Export, Import},
    code_builder::{CodeBuilder, Renderable},
    code_file::CodeFile,
};

fn stripe_dir(base: &Path) -> PathBuf {
    base.join("src").join("lib").join("stripe")
}

/// `stripe.service.ts`. Created once; users add their own methods to it.
pub struct StripeService<'a> {
    scope: &'a str,
}

impl<'a> StripeService<'a> {
    pub fn new(scope: &'a str) -> Self {
        Self { scope }
    }
}

struct ServiceObject;

impl Renderable for ServiceObject {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder
            .jsdoc_block(&[
                "A pre-configured service object for interacting",
                "with the Stripe API.",
                "",
                "This object contains all generic Stripe methods.",
            ])
            .block_with_close("export const stripeService = {", "};", |b| {
                b.block_with_close("...createStripeService({", "}),", |b| {
                    b.line("secretKey: process.env.STRIPE_SECRET_KEY || '',")
                })
                .blank()
                .lines(
                    r#"// --- Add custom methods below ---
//
// Example custom method:
// async getSubscriptionStatus(subscriptionId: string) {
//   const subscription = await this.client.subscriptions.retrieve(subscriptionId);
//   return subscription.status;
// }
//
// --- End custom methods ---"#,
                )
            })
    }
}

impl GeneratedFile for StripeService<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        stripe_dir(base).join("stripe.service.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(
                Import::new(format!("@{}/stripe-core", self.scope)).named("createStripeService"),
            )
            .add(ServiceObject)
            .render()
    }
}

/// `stripe.types.ts`.
pub struct StripeTypes;

impl GeneratedFile for StripeTypes {
    fn path(&self, base: &Path) -> PathBuf {
        stripe_dir(base).join("stripe.types.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        r#"// Re-export types from the core package or define custom ones here
export type { Stripe } from 'stripe';

export interface StripeServiceConfig {
  secretKey: string;
}
"#
        .to_string()
    }
}

/// `index.ts` re-exporting the service and its types.
pub struct StripeIndex;

impl GeneratedFile for StripeIndex {
    fn path(&self, base: &Path) -> PathBuf {
        stripe_dir(base).join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .export(Export::new().from("./stripe.service"))
            .export(Export::new().from("./stripe.types"))
            .render()
    }
}

//! Stripe edge functions plus the app-side Stripe service.

use supakit_core::GeneratedFile;

use crate::{
    files::stripe::{
        CorsHeaders, EdgeFunction, EdgeFunctionFile, StripeIndex, StripeService, StripeTypes,
    },
    scaffold::Scaffold,
};

/// Environment variables the generated functions read.
pub const REQUIRED_ENV: &[(&str, bool)] = &[
    ("STRIPE_SECRET_KEY", false),
    ("STRIPE_WEBHOOK_SECRET", false),
    ("SUPABASE_URL", true),
    ("SUPABASE_ANON_KEY", true),
    ("SUPABASE_SERVICE_ROLE_KEY", true),
    ("FRONTEND_URL", false),
];

/// Generates into a project root that has (or will get) a `supabase/` directory.
///
/// Edge functions and `cors.ts` are regenerated on every run;
/// `src/lib/stripe/stripe.service.ts` is created once.
pub struct StripeGenerator {
    scope: String,
    functions: Vec<EdgeFunction>,
}

impl StripeGenerator {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            functions: EdgeFunction::ALL.to_vec(),
        }
    }

    pub fn functions(&self) -> &[EdgeFunction] {
        &self.functions
    }
}

impl Scaffold for StripeGenerator {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();
        for function in &self.functions {
            files.push(Box::new(EdgeFunctionFile::new(*function)));
        }
        files.push(Box::new(CorsHeaders));
        files.push(Box::new(StripeService::new(&self.scope)));
        files.push(Box::new(StripeTypes));
        files.push(Box::new(StripeIndex));
        files
    }
}

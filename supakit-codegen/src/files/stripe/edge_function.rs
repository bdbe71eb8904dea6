//! Deno edge functions under `supabase/functions/`.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use super::{authenticated, webhook};
use crate::{
    ast::Import,
    code_builder::{CodeBuilder, Renderable},
};

const STRIPE_MODULE: &str = "https://esm.sh/stripe@14.10.0?target=deno";
const SUPABASE_MODULE: &str = "https://esm.sh/@supabase/supabase-js@2";
const STRIPE_API_VERSION: &str = "2023-10-16";

/// The edge functions a Stripe integration ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFunction {
    WebhookHandler,
    CreateCheckoutSession,
    SyncStripeCustomer,
    GetCustomerPortal,
}

impl EdgeFunction {
    pub const ALL: [EdgeFunction; 4] = [
        EdgeFunction::WebhookHandler,
        EdgeFunction::CreateCheckoutSession,
        EdgeFunction::SyncStripeCustomer,
        EdgeFunction::GetCustomerPortal,
    ];

    /// Directory name under `supabase/functions/`.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeFunction::WebhookHandler => "stripe-webhook-handler",
            EdgeFunction::CreateCheckoutSession => "create-checkout-session",
            EdgeFunction::SyncStripeCustomer => "sync-stripe-customer",
            EdgeFunction::GetCustomerPortal => "get-customer-portal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EdgeFunction::WebhookHandler => "Handles all Stripe webhook events",
            EdgeFunction::CreateCheckoutSession => "Creates Stripe checkout sessions",
            EdgeFunction::SyncStripeCustomer => "Syncs Stripe customer with Supabase Auth user",
            EdgeFunction::GetCustomerPortal => "Creates Stripe customer portal session",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            EdgeFunction::WebhookHandler => "Stripe Webhook Handler",
            EdgeFunction::CreateCheckoutSession => "Create Checkout Session",
            EdgeFunction::SyncStripeCustomer => "Sync Stripe Customer",
            EdgeFunction::GetCustomerPortal => "Customer Portal",
        }
    }

    /// Browser-facing functions answer CORS preflights; the webhook is
    /// only ever called by Stripe.
    fn uses_cors(&self) -> bool {
        !matches!(self, EdgeFunction::WebhookHandler)
    }
}

/// `supabase/functions/<name>/index.ts`.
pub struct EdgeFunctionFile {
    function: EdgeFunction,
}

impl EdgeFunctionFile {
    pub fn new(function: EdgeFunction) -> Self {
        Self { function }
    }
}

impl GeneratedFile for EdgeFunctionFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("supabase")
            .join("functions")
            .join(self.function.name())
            .join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let builder = Preamble(self.function).render(CodeBuilder::typescript());
        match self.function {
            EdgeFunction::WebhookHandler => webhook::render_handler(builder),
            EdgeFunction::CreateCheckoutSession => authenticated::render_checkout(builder),
            EdgeFunction::SyncStripeCustomer => authenticated::render_sync_customer(builder),
            EdgeFunction::GetCustomerPortal => authenticated::render_portal(builder),
        }
        .build()
    }
}

/// Title comment, imports, the Stripe client and the `json` response helper.
struct Preamble(EdgeFunction);

impl Renderable for Preamble {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let function = self.0;
        let mut builder = builder.line(&format!("// {}", function.title()));
        builder = Import::new(STRIPE_MODULE).default("Stripe").render(builder);
        builder = Import::new(SUPABASE_MODULE)
            .named("createClient")
            .render(builder);
        if function.uses_cors() {
            builder = Import::new("../_shared/cors.ts")
                .named("corsHeaders")
                .render(builder);
        }

        let headers = if function.uses_cors() {
            "{ ...corsHeaders, 'Content-Type': 'application/json' }"
        } else {
            "{ 'Content-Type': 'application/json' }"
        };

        builder
            .blank()
            .block_with_close(
                "const stripe = new Stripe(Deno.env.get('STRIPE_SECRET_KEY') || '', {",
                "});",
                |b| {
                    b.line(&format!("apiVersion: '{}',", STRIPE_API_VERSION))
                        .line("httpClient: Stripe.createFetchHttpClient(),")
                },
            )
            .blank()
            .line("const json = (body: unknown, status = 200) =>")
            .indent()
            .block_with_close("new Response(JSON.stringify(body), {", "});", |b| {
                b.line("status,").line(&format!("headers: {},", headers))
            })
            .dedent()
            .blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths: Vec<_> = EdgeFunction::ALL
            .into_iter()
            .map(|f| EdgeFunctionFile::new(f).path(Path::new("app")))
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("app/supabase/functions/stripe-webhook-handler/index.ts"),
                PathBuf::from("app/supabase/functions/create-checkout-session/index.ts"),
                PathBuf::from("app/supabase/functions/sync-stripe-customer/index.ts"),
                PathBuf::from("app/supabase/functions/get-customer-portal/index.ts"),
            ]
        );
    }

    #[test]
    fn test_always_overwritten() {
        for function in EdgeFunction::ALL {
            assert_eq!(
                EdgeFunctionFile::new(function).rules().overwrite,
                supakit_core::Overwrite::Always
            );
        }
    }

    #[test]
    fn test_webhook_preamble_has_no_cors() {
        let code = Preamble(EdgeFunction::WebhookHandler).build();

        insta::assert_snapshot!(code, @r"
        // Stripe Webhook Handler
        import Stripe from 'https://esm.sh/stripe@14.10.0?target=deno';
        import { createClient } from 'https://esm.sh/@supabase/supabase-js@2';

        const stripe = new Stripe(Deno.env.get('STRIPE_SECRET_KEY') || '', {
          apiVersion: '2023-10-16',
          httpClient: Stripe.createFetchHttpClient(),
        });

        const json = (body: unknown, status = 200) =>
          new Response(JSON.stringify(body), {
            status,
            headers: { 'Content-Type': 'application/json' },
          });
        ");
    }

    #[test]
    fn test_browser_functions_import_cors() {
        for function in &EdgeFunction::ALL[1..] {
            let code = EdgeFunctionFile::new(*function).render();
            assert!(code.contains("import { corsHeaders } from '../_shared/cors.ts';"));
            assert!(code.contains("if (req.method === 'OPTIONS') {"));
            assert!(code.starts_with(&format!("// {}\n", function.title())));
        }
    }
}

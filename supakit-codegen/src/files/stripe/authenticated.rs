//! Edge functions called from the browser on behalf of a signed-in user.
//!
//! Each one answers the CORS preflight, resolves the caller from the
//! `Authorization` header and then runs its own body.

use crate::code_builder::CodeBuilder;

const AUTHENTICATE: &str = r#"const supabaseUrl = Deno.env.get('SUPABASE_URL') || '';
const supabaseKey = Deno.env.get('SUPABASE_ANON_KEY') || '';
const supabase = createClient(supabaseUrl, supabaseKey, {
  global: { headers: { Authorization: req.headers.get('Authorization') || '' } },
});

const { data: { user }, error: userError } = await supabase.auth.getUser();
if (userError || !user) {
  return json({ error: 'Unauthorized' }, 401);
}"#;

/// Looks up the user's Stripe customer, creating one on first use.
const ENSURE_CUSTOMER: &str = r#"let customerId = user.user_metadata?.stripe_customer_id;

if (!customerId) {
  const customer = await stripe.customers.create({
    email: user.email,
    metadata: { supabase_user_id: user.id },
  });
  customerId = customer.id;

  const supabaseAdmin = createClient(
    supabaseUrl,
    Deno.env.get('SUPABASE_SERVICE_ROLE_KEY') || '',
  );
  await supabaseAdmin.auth.admin.updateUserById(user.id, {
    user_metadata: { stripe_customer_id: customerId },
  });
}"#;

const FRONTEND_URL: &str =
    "const frontendUrl = Deno.env.get('FRONTEND_URL') || 'http://localhost:3000';";

const CHECKOUT: &[&str] = &[
    r#"const { priceId } = await req.json();
if (!priceId) {
  return json({ error: 'priceId required' }, 400);
}"#,
    FRONTEND_URL,
    ENSURE_CUSTOMER,
    r#"const session = await stripe.checkout.sessions.create({
  customer: customerId,
  client_reference_id: user.id,
  line_items: [{ price: priceId, quantity: 1 }],
  mode: 'subscription',
  success_url: `${frontendUrl}/success?session_id={CHECKOUT_SESSION_ID}`,
  cancel_url: `${frontendUrl}/pricing`,
  metadata: { supabase_user_id: user.id },
});

return json({ sessionId: session.id, url: session.url });"#,
];

const SYNC_CUSTOMER: &[&str] = &[
    ENSURE_CUSTOMER,
    r#"const subscriptions = await stripe.subscriptions.list({
  customer: customerId,
  limit: 1,
});
const subscription = subscriptions.data[0];

return json({
  customerId,
  subscription: subscription
    ? {
        id: subscription.id,
        status: subscription.status,
        currentPeriodEnd: new Date(subscription.current_period_end * 1000),
      }
    : null,
});"#,
];

const PORTAL: &[&str] = &[
    r#"const customerId = user.user_metadata?.stripe_customer_id;
if (!customerId) {
  return json({ error: 'No Stripe customer found' }, 400);
}"#,
    FRONTEND_URL,
    r#"const session = await stripe.billingPortal.sessions.create({
  customer: customerId,
  return_url: `${frontendUrl}/account`,
});

return json({ url: session.url });"#,
];

pub(super) fn render_checkout(builder: CodeBuilder) -> CodeBuilder {
    render_authenticated(builder, CHECKOUT)
}

pub(super) fn render_sync_customer(builder: CodeBuilder) -> CodeBuilder {
    render_authenticated(builder, SYNC_CUSTOMER)
}

pub(super) fn render_portal(builder: CodeBuilder) -> CodeBuilder {
    render_authenticated(builder, PORTAL)
}

fn render_authenticated(builder: CodeBuilder, steps: &[&str]) -> CodeBuilder {
    builder.block_with_close("Deno.serve(async (req) => {", "});", |b| {
        b.block_with_close("if (req.method === 'OPTIONS') {", "}", |b| {
            b.line("return new Response('ok', { headers: corsHeaders });")
        })
        .blank()
        .block_with_close("try {", "} catch (error) {", |b| {
            b.lines(AUTHENTICATE)
                .each(steps, |b, step| b.blank().lines(step))
        })
        .indent()
        .line("console.error('Error:', error);")
        .line("return json({ error: error.message }, 500);")
        .dedent()
        .line("}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: fn(CodeBuilder) -> CodeBuilder) -> String {
        f(CodeBuilder::typescript()).build()
    }

    #[test]
    fn test_portal() {
        insta::assert_snapshot!(render(render_portal), @r"
        Deno.serve(async (req) => {
          if (req.method === 'OPTIONS') {
            return new Response('ok', { headers: corsHeaders });
          }

          try {
            const supabaseUrl = Deno.env.get('SUPABASE_URL') || '';
            const supabaseKey = Deno.env.get('SUPABASE_ANON_KEY') || '';
            const supabase = createClient(supabaseUrl, supabaseKey, {
              global: { headers: { Authorization: req.headers.get('Authorization') || '' } },
            });

            const { data: { user }, error: userError } = await supabase.auth.getUser();
            if (userError || !user) {
              return json({ error: 'Unauthorized' }, 401);
            }

            const customerId = user.user_metadata?.stripe_customer_id;
            if (!customerId) {
              return json({ error: 'No Stripe customer found' }, 400);
            }

            const frontendUrl = Deno.env.get('FRONTEND_URL') || 'http://localhost:3000';

            const session = await stripe.billingPortal.sessions.create({
              customer: customerId,
              return_url: `${frontendUrl}/account`,
            });

            return json({ url: session.url });
          } catch (error) {
            console.error('Error:', error);
            return json({ error: error.message }, 500);
          }
        });
        ");
    }

    #[test]
    fn test_checkout_creates_missing_customer() {
        let code = render(render_checkout);

        let customer = code
            .find("await stripe.customers.create(")
            .expect("customer creation");
        let session = code
            .find("await stripe.checkout.sessions.create(")
            .expect("checkout session");
        assert!(customer < session);
        assert!(code.contains("    if (!priceId) {\n"));
    }

    #[test]
    fn test_sync_reports_latest_subscription() {
        let code = render(render_sync_customer);

        assert!(code.contains("await stripe.subscriptions.list({"));
        assert!(code.contains("    let customerId = user.user_metadata?.stripe_customer_id;\n"));
        assert!(!code.contains("frontendUrl"));
    }
}

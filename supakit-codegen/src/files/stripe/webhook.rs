//! The `stripe-webhook-handler` edge function.
//!
//! The event switch is generated from [`HANDLED_EVENTS`]; anything else
//! falls through to a logged default branch.

use crate::code_builder::{CodeBuilder, Renderable};

/// A group of Stripe event types sharing one `case` body.
#[derive(Debug)]
pub struct WebhookEvent {
    /// Event types routed to this branch.
    pub types: &'static [&'static str],
    /// Name the event payload is bound to inside the branch.
    binding: &'static str,
    /// Prefix of the log line written when the branch runs.
    log: &'static str,
    body: &'static str,
}

pub const HANDLED_EVENTS: &[WebhookEvent] = &[
    WebhookEvent {
        types: &["checkout.session.completed"],
        binding: "session",
        log: "Checkout completed",
        body: r#"if (session.client_reference_id && session.customer) {
  await supabase.auth.admin.updateUserById(session.client_reference_id, {
    user_metadata: { stripe_customer_id: session.customer },
  });

  await supabase.from('subscriptions').upsert({
    user_id: session.client_reference_id,
    stripe_customer_id: session.customer,
    stripe_subscription_id: session.subscription,
    status: 'active',
  });
}"#,
    },
    WebhookEvent {
        types: &[
            "customer.subscription.created",
            "customer.subscription.updated",
        ],
        binding: "subscription",
        log: "Subscription event",
        body: r#"await supabase.from('subscriptions').upsert(
  {
    stripe_subscription_id: subscription.id,
    stripe_customer_id: subscription.customer,
    status: subscription.status,
    price_id: subscription.items.data[0]?.price.id,
    current_period_start: new Date(subscription.current_period_start * 1000).toISOString(),
    current_period_end: new Date(subscription.current_period_end * 1000).toISOString(),
    cancel_at_period_end: subscription.cancel_at_period_end,
  },
  { onConflict: 'stripe_subscription_id' },
);"#,
    },
    WebhookEvent {
        types: &["customer.subscription.deleted"],
        binding: "subscription",
        log: "Subscription cancelled",
        body: r#"await supabase
  .from('subscriptions')
  .update({ status: 'cancelled', cancelled_at: new Date().toISOString() })
  .eq('stripe_subscription_id', subscription.id);"#,
    },
    WebhookEvent {
        types: &["invoice.payment_succeeded"],
        binding: "invoice",
        log: "Payment succeeded",
        body: r#"if (invoice.subscription) {
  await supabase
    .from('subscriptions')
    .update({ status: 'active', last_payment_at: new Date().toISOString() })
    .eq('stripe_subscription_id', invoice.subscription);
}"#,
    },
    WebhookEvent {
        types: &["invoice.payment_failed"],
        binding: "invoice",
        log: "Payment failed",
        body: r#"if (invoice.subscription) {
  await supabase
    .from('subscriptions')
    .update({ status: 'past_due' })
    .eq('stripe_subscription_id', invoice.subscription);
}"#,
    },
];

/// Every event type the generated handler reacts to, in switch order.
pub fn handled_event_types() -> impl Iterator<Item = &'static str> {
    HANDLED_EVENTS.iter().flat_map(|event| event.types.iter().copied())
}

impl Renderable for WebhookEvent {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let Some((last, leading)) = self.types.split_last() else {
            return builder;
        };

        builder
            .each(leading, |b, ty| b.line(&format!("case '{}':", ty)))
            .block_with_close(&format!("case '{}': {{", last), "}", |b| {
                b.line(&format!("const {} = event.data.object;", self.binding))
                    .line(&format!("console.log('{}:', {}.id);", self.log, self.binding))
                    .blank()
                    .lines(self.body)
                    .line("break;")
            })
            .blank()
    }
}

const METHOD_GUARD: &str = r#"if (req.method !== 'POST') {
  return json({ error: 'Method not allowed' }, 405);
}"#;

const VERIFY_EVENT: &str = r#"const signature = req.headers.get('stripe-signature');
if (!signature) {
  return json({ error: 'Missing signature' }, 400);
}

const body = await req.text();
let event;

try {
  event = await stripe.webhooks.constructEventAsync(body, signature, webhookSecret);
} catch (err) {
  console.error('Webhook verification failed:', err.message);
  return json({ error: 'Invalid signature' }, 400);
}

console.log('Webhook verified:', event.type);

const supabase = createClient(
  Deno.env.get('SUPABASE_URL') || '',
  Deno.env.get('SUPABASE_SERVICE_ROLE_KEY') || '',
);"#;

pub(super) fn render_handler(builder: CodeBuilder) -> CodeBuilder {
    builder
        .line("const webhookSecret = Deno.env.get('STRIPE_WEBHOOK_SECRET') || '';")
        .blank()
        .block_with_close("Deno.serve(async (req) => {", "});", |b| {
            b.lines(METHOD_GUARD)
                .blank()
                .block_with_close("try {", "} catch (error) {", |b| {
                    b.lines(VERIFY_EVENT)
                        .blank()
                        .block_with_close("switch (event.type) {", "}", |b| {
                            b.each(HANDLED_EVENTS, |b, event| event.render(b))
                                .line("default:")
                                .indent()
                                .line("console.log('Unhandled event type:', event.type);")
                                .dedent()
                        })
                        .blank()
                        .line("return json({ received: true });")
                })
                .indent()
                .line("console.error('Error:', error);")
                .line("return json({ error: 'Internal server error' }, 500);")
                .dedent()
                .line("}")
        })
}

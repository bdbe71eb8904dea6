mod api;
mod stripe;
mod workspace;

pub use api::{ApiGenerator, ApiOptions};
pub use stripe::{REQUIRED_ENV, StripeGenerator};
pub use workspace::WorkspaceGenerator;

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

/// `supabase/functions/_shared/cors.ts`, shared by the browser-facing functions.
pub struct CorsHeaders;

impl GeneratedFile for CorsHeaders {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("supabase")
            .join("functions")
            .join("_shared")
            .join("cors.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        r#"// CORS headers for browser-facing edge functions
export const corsHeaders = {
  'Access-Control-Allow-Origin': '*',
  'Access-Control-Allow-Headers': 'authorization, x-client-info, apikey, content-type',
};
"#
        .to_string()
    }
}

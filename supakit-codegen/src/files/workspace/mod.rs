//! Files of a freshly bootstrapped monorepo workspace.

mod core_sources;
mod package_json;
mod readme;
mod tsconfig;
mod yarn_lock;

pub use core_sources::{CoreIndex, DatabaseService, DatabaseTypes, ViteEnv};
pub use package_json::{CorePackageJson, Dependency, RootPackageJson};
pub use readme::Readme;
pub use tsconfig::CoreTsConfig;
pub use yarn_lock::YarnLock;

use std::path::{Path, PathBuf};

/// Directory of the shared `supabase-core` package inside the workspace.
pub(crate) fn core_dir(base: &Path) -> PathBuf {
    base.join("packages").join("supabase-core")
}

/// Encode `s` as a JSON string literal, quotes included.
pub(crate) fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_string_escapes() {
        assert_eq!(json_string("acme"), "\"acme\"");
        assert_eq!(json_string("a\"b"), "\"a\\\"b\"");
    }
}

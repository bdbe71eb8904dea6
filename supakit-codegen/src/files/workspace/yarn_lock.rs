use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

/// Empty `yarn.lock`, so Yarn treats the directory as its own project
/// instead of joining an enclosing one.
pub struct YarnLock;

impl GeneratedFile for YarnLock {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("yarn.lock")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        String::new()
    }
}

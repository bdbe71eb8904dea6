//! Sources of the `supabase-core` package.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use super::core_dir;
use crate::{ast::Export, code_file::CodeFile};

fn src_dir(base: &Path) -> PathBuf {
    core_dir(base).join("src")
}

/// Placeholder `database.types.ts`; `supabase gen types` overwrites it.
pub struct DatabaseTypes;

impl GeneratedFile for DatabaseTypes {
    fn path(&self, base: &Path) -> PathBuf {
        src_dir(base).join("database.types.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        include_str!("../../../templates/database.types.ts").to_string()
    }
}

/// Generic CRUD functions and the `SupabaseService` factory every
/// generated table service spreads.
pub struct DatabaseService;

impl GeneratedFile for DatabaseService {
    fn path(&self, base: &Path) -> PathBuf {
        src_dir(base).join("database.service.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        include_str!("../../../templates/database.service.ts").to_string()
    }
}

pub struct ViteEnv;

impl GeneratedFile for ViteEnv {
    fn path(&self, base: &Path) -> PathBuf {
        src_dir(base).join("vite-env.d.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"/// <reference types="vite/client" />

interface ImportMetaEnv {
    readonly VITE_PUBLIC_SUPABASE_URL: string
    readonly VITE_PUBLIC_SUPABASE_ANON_KEY: string
}

interface ImportMeta {
    readonly env: ImportMetaEnv
}
"#
        .to_string()
    }
}

/// Package entry point.
pub struct CoreIndex;

impl GeneratedFile for CoreIndex {
    fn path(&self, base: &Path) -> PathBuf {
        src_dir(base).join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .export(Export::new().from("./database.types"))
            .export(Export::new().from("./database.service"))
            .render()
    }
}

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use super::core_dir;

/// `packages/supabase-core/tsconfig.json`.
pub struct CoreTsConfig;

impl GeneratedFile for CoreTsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        core_dir(base).join("tsconfig.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"{
    "compilerOptions": {
        "target": "ES2020",
        "module": "ESNext",
        "lib": [
            "ES2020",
            "DOM"
        ],
        "declaration": true,
        "outDir": "./dist",
        "rootDir": "./src",
        "strict": true,
        "esModuleInterop": true,
        "skipLibCheck": true,
        "forceConsistentCasingInFileNames": true,
        "moduleResolution": "bundler",
        "resolveJsonModule": true,
        "types": [
            "vite/client"
        ]
    },
    "include": [
        "src/**/*"
    ],
    "exclude": [
        "node_modules",
        "dist"
    ]
}
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(&CoreTsConfig.render()).expect("valid JSON");
        assert_eq!(value["compilerOptions"]["rootDir"], "./src");
    }
}

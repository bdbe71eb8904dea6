use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

/// Workspace `README.md`.
pub struct Readme {
    name: String,
    with_app: bool,
}

impl Readme {
    pub fn new(name: impl Into<String>, with_app: bool) -> Self {
        Self {
            name: name.into(),
            with_app,
        }
    }
}

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("README.md")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let run_step = if self.with_app {
            "Run the example app:\n    ```bash\n    yarn dev\n    ```"
        } else {
            "Create a new app in `apps/`."
        };

        format!(
            r#"# {name}

A Supabase monorepo workspace generated with `supakit workspace`.

## Structure

- `packages/supabase-core`: shared Supabase types and the generic `SupabaseService`.
- `apps/`: application packages (e.g. Vite apps).

## Getting Started

1.  Install dependencies:
    ```bash
    yarn install
    ```

2.  Build packages:
    ```bash
    yarn build
    ```

3.  {run_step}

## Generating table services

Refresh `packages/supabase-core/src/database.types.ts` with
`npx supabase gen types typescript`, then run:

```bash
supakit generate packages/supabase-core/src/database.types.ts --schema public
```

## Scripts

- `yarn build`: Build all workspaces.
- `yarn dev`: Run the development server (defaults to example app if present).
- `yarn clean`: Clean all workspaces.
"#,
            name = self.name,
            run_step = run_step
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_app_only_when_created() {
        let with_app = Readme::new("acme", true).render();
        let without = Readme::new("acme", false).render();

        assert!(with_app.starts_with("# acme\n"));
        assert!(with_app.contains("3.  Run the example app:\n    ```bash\n    yarn dev\n"));
        assert!(without.contains("3.  Create a new app in `apps/`.\n"));
    }
}

//! `package.json` generators for the workspace root and `supabase-core`.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use super::{core_dir, json_string};

const PACKAGE_MANAGER: &str = "yarn@4.12.0";
const WORKSPACE_VERSION: &str = "1.0.0";

/// A dependency with name and version.
#[derive(Debug, Clone)]
pub struct Dependency {
    name: String,
    version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Render `"key": "value"` entries at `indent`, comma separated.
fn render_entries<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    indent: &str,
) -> String {
    entries
        .into_iter()
        .map(|(key, value)| format!("{}{}: {}", indent, json_string(key), json_string(value)))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn render_dependencies(deps: &[Dependency], indent: &str) -> String {
    render_entries(
        deps.iter().map(|d| (d.name.as_str(), d.version.as_str())),
        indent,
    )
}

/// The root `package.json` declaring the Yarn workspaces.
pub struct RootPackageJson {
    pub name: String,
    pub repository: Option<String>,
    pub with_app: bool,
    pub dev_dependencies: Vec<Dependency>,
}

impl RootPackageJson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository: None,
            with_app: false,
            dev_dependencies: vec![
                Dependency::new("typescript", "^5.3.0"),
                Dependency::new("vite", "^5.0.0"),
            ],
        }
    }

    pub fn with_repository(mut self, url: Option<String>) -> Self {
        self.repository = url;
        self
    }

    /// Point `yarn dev` at the example app.
    pub fn with_app(mut self, with_app: bool) -> Self {
        self.with_app = with_app;
        self
    }
}

impl GeneratedFile for RootPackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let repository = self
            .repository
            .as_deref()
            .map(|url| format!("  \"repository\": {},\n", json_string(url)))
            .unwrap_or_default();
        let dev = if self.with_app {
            "yarn workspace example run dev"
        } else {
            "echo 'No app to run'"
        };
        let scripts = render_entries(
            [
                ("build", "yarn workspaces foreach --all run build"),
                ("dev", dev),
                ("clean", "yarn workspaces foreach --all run clean || true"),
            ],
            "    ",
        );

        format!(
            r#"{{
  "name": {},
  "version": "{}",
  "private": true,
  "workspaces": [
    "packages/*",
    "apps/*"
  ],
  "packageManager": "{}",
{}  "scripts": {{
{}
  }},
  "devDependencies": {{
{}
  }}
}}
"#,
            json_string(&self.name),
            WORKSPACE_VERSION,
            PACKAGE_MANAGER,
            repository,
            scripts,
            render_dependencies(&self.dev_dependencies, "    ")
        )
    }
}

/// `packages/supabase-core/package.json`, published as `@<scope>/supabase-core`.
pub struct CorePackageJson {
    pub scope: String,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
}

impl CorePackageJson {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            dependencies: vec![Dependency::new("@supabase/supabase-js", "^2.84.0")],
            dev_dependencies: vec![Dependency::new("typescript", "^5.3.0")],
        }
    }
}

impl GeneratedFile for CorePackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        core_dir(base).join("package.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"{{
    "name": {},
    "version": "{}",
    "description": "Core Supabase client and types for workspace",
    "main": "dist/index.js",
    "types": "dist/index.d.ts",
    "scripts": {{
        "build": "tsc",
        "dev": "tsc --watch"
    }},
    "keywords": [
        "supabase",
        "client"
    ],
    "license": "MIT",
    "dependencies": {{
{}
    }},
    "devDependencies": {{
{}
    }}
}}
"#,
            json_string(&format!("@{}/supabase-core", self.scope)),
            WORKSPACE_VERSION,
            render_dependencies(&self.dependencies, "        "),
            render_dependencies(&self.dev_dependencies, "        ")
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn parse(content: &str) -> Value {
        serde_json::from_str(content).expect("valid JSON")
    }

    #[test]
    fn test_root_package_json() {
        let pkg = RootPackageJson::new("acme").render();

        insta::assert_snapshot!(pkg, @r#"
        {
          "name": "acme",
          "version": "1.0.0",
          "private": true,
          "workspaces": [
            "packages/*",
            "apps/*"
          ],
          "packageManager": "yarn@4.12.0",
          "scripts": {
            "build": "yarn workspaces foreach --all run build",
            "dev": "echo 'No app to run'",
            "clean": "yarn workspaces foreach --all run clean || true"
          },
          "devDependencies": {
            "typescript": "^5.3.0",
            "vite": "^5.0.0"
          }
        }
        "#);
    }

    #[test]
    fn test_root_package_json_with_repository_and_app() {
        let pkg = RootPackageJson::new("acme")
            .with_repository(Some("https://github.com/acme/app.git".into()))
            .with_app(true)
            .render();

        let value = parse(&pkg);
        assert_eq!(value["repository"], "https://github.com/acme/app.git");
        assert_eq!(value["scripts"]["dev"], "yarn workspace example run dev");
        assert_eq!(value["workspaces"], json!(["packages/*", "apps/*"]));
    }

    #[test]
    fn test_core_package_json() {
        let pkg = CorePackageJson::new("acme").render();
        let value = parse(&pkg);

        assert_eq!(value["name"], "@acme/supabase-core");
        assert_eq!(value["dependencies"]["@supabase/supabase-js"], "^2.84.0");
        assert!(pkg.contains("\n    \"main\": \"dist/index.js\",\n"));
        assert_eq!(
            CorePackageJson::new("acme").path(Path::new("acme")),
            PathBuf::from("acme/packages/supabase-core/package.json")
        );
    }
}

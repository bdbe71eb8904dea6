use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

const TYPES: &str = r#"export type Database = {
  public: {
    Tables: {
      authors: {
        Row: {
          id: string
        }
        Relationships: []
      }
      posts: {
        Row: {
          id: string
        }
        Relationships: [
          {
            foreignKeyName: "posts_author_id_fkey"
            columns: ["author_id"]
            isOneToOne: false
            referencedRelation: "authors"
            referencedColumns: ["id"]
          },
        ]
      }
    }
    Views: {
      post_summaries: {
        Row: {
          id: string | null
        }
      }
    }
  }
}
"#;

fn supakit(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_supakit"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn test_missing_types_file_exits_with_error() {
    let dir = TempDir::new().unwrap();

    let output = supakit(dir.path(), &["generate", "missing.types.ts", "--scope", "acme"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("types file not found"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_missing_types_argument_exits_with_error() {
    let dir = TempDir::new().unwrap();

    let output = supakit(dir.path(), &["generate", "--scope", "acme"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no types file given"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_generate_writes_table_modules() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("database.types.ts"), TYPES).unwrap();

    let output = supakit(
        dir.path(),
        &["generate", "database.types.ts", "--scope", "acme"],
    );

    assert!(output.status.success());
    let api = dir.path().join("src/lib/api");
    let posts = fs::read_to_string(api.join("posts/posts.types.ts")).unwrap();
    assert!(posts.contains("authors?: Tables<'authors'>[];"));
    let index = fs::read_to_string(api.join("index.ts")).unwrap();
    assert_eq!(
        index.lines().collect::<Vec<_>>(),
        [
            "export * from './authors/service';",
            "export * from './posts/service';",
            "export * from './post_summaries/service';",
        ]
    );
}

#[test]
fn test_generate_reads_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("database.types.ts"), TYPES).unwrap();
    fs::write(
        dir.path().join("supakit.toml"),
        "[project]\nscope = \"acme\"\n\n[generate]\ntypes = \"database.types.ts\"\noutput = \"api\"\n",
    )
    .unwrap();

    let output = supakit(dir.path(), &["generate"]);

    assert!(output.status.success());
    let service = fs::read_to_string(dir.path().join("api/posts/service.ts")).unwrap();
    assert!(service.contains("@acme/supabase-core"));
}

#[test]
fn test_extract_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("database.types.ts"), TYPES).unwrap();

    let output = supakit(
        dir.path(),
        &["extract", "database.types.ts", "--schema", "public", "--json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["schema"],
        serde_json::json!({ "authors": false, "posts": false, "post_summaries": true })
    );
    assert_eq!(
        value["relationships"]["posts"],
        serde_json::json!([{
            "targetTable": "authors",
            "isArray": true,
            "foreignKey": "posts_author_id_fkey"
        }])
    );
}

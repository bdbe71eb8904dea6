//! Line-level matching shared by both extraction passes.

use supakit_core::is_identifier;

/// Nested object keys that describe a relation's shape rather than name one.
pub(crate) const RESERVED_KEYS: [&str; 4] = ["Row", "Insert", "Update", "Relationships"];

/// The top-level blocks of a schema that list relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Tables,
    Views,
}

impl BlockKind {
    fn opener(self) -> &'static str {
        match self {
            BlockKind::Tables => "Tables: {",
            BlockKind::Views => "Views: {",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Tables => write!(f, "Tables"),
            BlockKind::Views => write!(f, "Views"),
        }
    }
}

/// The lines following a block opener, with the depth reached on the opener line.
pub(crate) struct Block<'a> {
    pub depth: i32,
    pub lines: std::str::Lines<'a>,
}

/// Find the first `kind` opener in `source`.
///
/// Depth starts at 1 for the opener itself; braces after it on the same line
/// count too, so a one-line `Views: { [_ in never]: never }` opens and closes.
pub(crate) fn open_block(source: &str, kind: BlockKind) -> Option<Block<'_>> {
    let opener = kind.opener();
    let start = source.find(opener)? + opener.len();
    let rest = &source[start..];
    let (opener_tail, body) = match rest.split_once('\n') {
        Some((tail, body)) => (tail, body),
        None => (rest, ""),
    };

    Some(Block {
        depth: 1 + brace_delta(opener_tail),
        lines: body.lines(),
    })
}

/// The lines between the first `name: {` header line and the line that
/// closes it. Unterminated schemas run to the end of the text.
pub(crate) fn schema_body<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    let mut body_start = None;
    let mut depth = 1;
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        match body_start {
            None if block_header(line) == Some(name) => body_start = Some(offset + line.len()),
            None => {}
            Some(start) => {
                depth += brace_delta(line);
                if depth <= 0 {
                    return Some(&source[start..offset]);
                }
            }
        }
        offset += line.len();
    }

    body_start.map(|start| &source[start..])
}

/// The identifier of a line consisting of exactly `identifier: {`.
///
/// Headers embedded mid-line never match.
pub(crate) fn block_header(line: &str) -> Option<&str> {
    let (name, rest) = line.trim().split_once(':')?;
    (is_identifier(name) && rest.trim() == "{").then_some(name)
}

/// A block header naming a relation rather than one of its shape keys.
pub(crate) fn relation_header(line: &str) -> Option<&str> {
    block_header(line).filter(|name| !RESERVED_KEYS.contains(name))
}

/// Opening minus closing braces on a line.
pub(crate) fn brace_delta(line: &str) -> i32 {
    line.chars().fold(0, |delta, c| match c {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}

/// The non-empty double-quoted string following `key` on the line.
pub(crate) fn quoted_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let after = &line[line.find(key)? + key.len()..];
    let rest = after.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    (end > 0).then(|| &rest[..end])
}

/// The boolean literal following `key` on the line.
pub(crate) fn bool_value(line: &str, key: &str) -> Option<bool> {
    let after = line[line.find(key)? + key.len()..].trim_start();
    if after.starts_with("true") {
        Some(true)
    } else if after.starts_with("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_header() {
        assert_eq!(block_header("      chat_conversations: {"), Some("chat_conversations"));
        assert_eq!(block_header("posts:{"), Some("posts"));
        assert_eq!(block_header("  posts: {   "), Some("posts"));
        assert_eq!(block_header("Row: {"), Some("Row"));
    }

    #[test]
    fn test_block_header_requires_whole_line() {
        assert_eq!(block_header("posts: { id: string }"), None);
        assert_eq!(block_header("export type Foo = { posts: {"), None);
        assert_eq!(block_header("posts : {"), None);
        assert_eq!(block_header("Relationships: ["), None);
        assert_eq!(block_header("[_ in never]: {"), None);
    }

    #[test]
    fn test_relation_header_skips_reserved_keys() {
        for key in RESERVED_KEYS {
            assert_eq!(relation_header(&format!("        {key}: {{")), None);
        }
        assert_eq!(relation_header("      profiles: {"), Some("profiles"));
    }

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("posts: {"), 1);
        assert_eq!(brace_delta("Row: {}"), 0);
        assert_eq!(brace_delta("}"), -1);
        assert_eq!(brace_delta("{ a: { b: {} }"), 1);
    }

    #[test]
    fn test_quoted_value() {
        assert_eq!(
            quoted_value(r#"foreignKeyName: "posts_author_id_fkey""#, "foreignKeyName:"),
            Some("posts_author_id_fkey")
        );
        assert_eq!(
            quoted_value(r#"referencedRelation:"authors""#, "referencedRelation:"),
            Some("authors")
        );
        assert_eq!(quoted_value(r#"foreignKeyName: """#, "foreignKeyName:"), None);
        assert_eq!(quoted_value(r#"foreignKeyName: "open"#, "foreignKeyName:"), None);
        assert_eq!(quoted_value("columns: [\"author_id\"]", "foreignKeyName:"), None);
    }

    #[test]
    fn test_bool_value() {
        assert_eq!(bool_value("isOneToOne: false", "isOneToOne:"), Some(false));
        assert_eq!(bool_value("isOneToOne:true", "isOneToOne:"), Some(true));
        assert_eq!(bool_value("isOneToOne: maybe", "isOneToOne:"), None);
        assert_eq!(bool_value("referencedRelation: \"a\"", "isOneToOne:"), None);
    }

    #[test]
    fn test_open_block_seeds_depth() {
        let block = open_block("Database = {\n  Tables: {\n    posts: {\n", BlockKind::Tables)
            .expect("block");
        assert_eq!(block.depth, 1);
        assert_eq!(block.lines.collect::<Vec<_>>(), vec!["    posts: {"]);
    }

    #[test]
    fn test_open_block_closed_on_opener_line() {
        let block =
            open_block("Views: { [_ in never]: never }\n", BlockKind::Views).expect("block");
        assert_eq!(block.depth, 0);
    }

    #[test]
    fn test_open_block_missing() {
        assert!(open_block("Views: {\n}\n", BlockKind::Tables).is_none());
    }

    #[test]
    fn test_schema_body() {
        let source = "graphql_public: {\n  Tables: {\n  }\n}\npublic: {\n  Tables: {\n  }\n}\nstorage: {\n  Views: {\n  }\n}\n";
        assert_eq!(schema_body(source, "public"), Some("  Tables: {\n  }\n"));
        assert_eq!(schema_body(source, "graphql_public"), Some("  Tables: {\n  }\n"));
        assert!(schema_body(source, "auth").is_none());
    }

    #[test]
    fn test_schema_body_unterminated() {
        let source = "public: {\n  Tables: {\n";
        assert_eq!(schema_body(source, "public"), Some("  Tables: {\n"));
    }
}

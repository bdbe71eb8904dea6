use crate::{
    diagnostic::{Diagnostic, DiagnosticSink},
    scan::{BlockKind, brace_delta, open_block, relation_header, schema_body},
    types::{ExtractOptions, SchemaMap},
};

/// Collect every table and view name declared in `source`.
///
/// Names from the `Tables` block map to `false`, names from the `Views` block
/// to `true`. A missing block is reported as a warning and contributes nothing.
pub fn extract_tables_and_views(
    source: &str,
    options: &ExtractOptions,
    sink: &mut dyn DiagnosticSink,
) -> SchemaMap {
    let mut schema = SchemaMap::default();

    for (kind, is_view) in [(BlockKind::Tables, false), (BlockKind::Views, true)] {
        for name in relation_names(source, options, kind, sink) {
            schema.insert(name, is_view);
        }
    }

    schema
}

/// Top-level `name: {` headers of the first `kind` block.
fn relation_names<'a>(
    source: &'a str,
    options: &ExtractOptions,
    kind: BlockKind,
    sink: &mut dyn DiagnosticSink,
) -> Vec<&'a str> {
    let Some(scoped) = scoped_source(source, options, sink) else {
        return Vec::new();
    };
    let Some(block) = open_block(scoped, kind) else {
        sink.report(Diagnostic::warning(format!("could not find {kind} block")));
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut depth = block.depth;

    for line in block.lines {
        if depth <= 0 {
            break;
        }
        let level = depth;
        depth += brace_delta(line);

        if level == 1
            && let Some(name) = relation_header(line)
        {
            names.push(name);
        }
    }

    names
}

/// The text to search for blocks in, honouring `options.schema`.
pub(crate) fn scoped_source<'a>(
    source: &'a str,
    options: &ExtractOptions,
    sink: &mut dyn DiagnosticSink,
) -> Option<&'a str> {
    match &options.schema {
        None => Some(source),
        Some(name) => {
            let body = schema_body(source, name);
            if body.is_none() {
                sink.report(Diagnostic::warning(format!("could not find schema '{name}'")));
            }
            body
        }
    }
}

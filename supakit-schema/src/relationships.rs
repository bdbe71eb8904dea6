//! Foreign-key relationships declared in the `Tables` block.
//!
//! The scanner is a small state machine fed one line at a time:
//!
//! ```text
//! Outside ──header──▶ InTableBlock ──`Relationships: [`──▶ InRelationshipsArray
//!    ▲                    │  ▲                                 │  ▲
//!    └──table depth 0─────┘  └──────────────`]`────────────────┘  │
//!                                               `{` ▼             │ `}` / `},`
//!                                          InRelationshipObject ──┘
//! ```
//!
//! Any in-table state returns to `Outside` once the table's brace depth drops
//! back to zero. Scanning ends when the enclosing `Tables` block closes.

use crate::{
    diagnostic::{Diagnostic, DiagnosticSink},
    scan::{BlockKind, bool_value, brace_delta, open_block, quoted_value, relation_header},
    tables::scoped_source,
    types::{ExtractOptions, RelationshipInfo, RelationshipMap},
};

const RELATIONSHIPS_OPENER: &str = "Relationships: [";
const FOREIGN_KEY_NAME: &str = "foreignKeyName:";
const REFERENCED_RELATION: &str = "referencedRelation:";
const IS_ONE_TO_ONE: &str = "isOneToOne:";

/// Collect the relationships of every table in the `Tables` block.
///
/// Views are not scanned. Every table that is opened gets an entry, even when
/// it declares no relationships. A missing block is reported as a warning.
pub fn extract_relationships(
    source: &str,
    options: &ExtractOptions,
    sink: &mut dyn DiagnosticSink,
) -> RelationshipMap {
    let mut relationships = RelationshipMap::default();

    let Some(scoped) = scoped_source(source, options, sink) else {
        return relationships;
    };
    let Some(block) = open_block(scoped, BlockKind::Tables) else {
        sink.report(Diagnostic::warning(
            "could not find Tables block for relationships",
        ));
        return relationships;
    };

    let mut block_depth = block.depth;
    let mut state = State::Outside;

    for line in block.lines {
        if block_depth <= 0 {
            break;
        }
        block_depth += brace_delta(line);
        state = state.step(line, &mut relationships);
    }

    relationships
}

/// The table currently being scanned.
#[derive(Debug, Clone, Copy)]
struct OpenTable<'a> {
    name: &'a str,
    /// Brace depth relative to the table header line.
    depth: i32,
}

/// Fields seen so far inside one relationship object.
#[derive(Debug, Default)]
struct PartialRelationship<'a> {
    foreign_key: Option<&'a str>,
    target_table: Option<&'a str>,
    is_array: Option<bool>,
}

impl<'a> PartialRelationship<'a> {
    fn observe(&mut self, line: &'a str) {
        if let Some(name) = quoted_value(line, FOREIGN_KEY_NAME) {
            self.foreign_key = Some(name);
        }
        if let Some(relation) = quoted_value(line, REFERENCED_RELATION) {
            self.target_table = Some(relation);
        }
        if let Some(one_to_one) = bool_value(line, IS_ONE_TO_ONE) {
            self.is_array = Some(!one_to_one);
        }
    }

    /// A relationship, if both the target and the constraint name were seen.
    fn finish(self) -> Option<RelationshipInfo> {
        Some(RelationshipInfo::new(
            self.target_table?,
            self.is_array.unwrap_or(false),
            self.foreign_key?,
        ))
    }
}

#[derive(Debug)]
enum State<'a> {
    /// Between table definitions.
    Outside,
    /// Inside a table, outside its `Relationships` array.
    InTableBlock(OpenTable<'a>),
    /// Inside the `Relationships` array, between objects.
    InRelationshipsArray(OpenTable<'a>),
    /// Inside one relationship object.
    InRelationshipObject(OpenTable<'a>, PartialRelationship<'a>),
}

impl<'a> State<'a> {
    fn step(self, line: &'a str, relationships: &mut RelationshipMap) -> Self {
        let trimmed = line.trim();

        let next = match self {
            State::Outside => {
                return match relation_header(line) {
                    Some(name) => {
                        relationships.open_table(name);
                        State::InTableBlock(OpenTable { name, depth: 1 })
                    }
                    None => State::Outside,
                };
            }
            State::InTableBlock(mut table) => {
                table.depth += brace_delta(line);
                if trimmed == RELATIONSHIPS_OPENER {
                    State::InRelationshipsArray(table)
                } else {
                    State::InTableBlock(table)
                }
            }
            State::InRelationshipsArray(mut table) => {
                table.depth += brace_delta(line);
                match trimmed {
                    "{" => State::InRelationshipObject(table, PartialRelationship::default()),
                    "]" => State::InTableBlock(table),
                    _ => State::InRelationshipsArray(table),
                }
            }
            State::InRelationshipObject(mut table, mut partial) => {
                table.depth += brace_delta(line);
                match trimmed {
                    "{" => State::InRelationshipObject(table, PartialRelationship::default()),
                    "}" | "}," => {
                        if let Some(relationship) = partial.finish() {
                            relationships.push_unique(table.name, relationship);
                        }
                        State::InRelationshipsArray(table)
                    }
                    _ => {
                        partial.observe(trimmed);
                        if trimmed == "]" {
                            State::InTableBlock(table)
                        } else {
                            State::InRelationshipObject(table, partial)
                        }
                    }
                }
            }
        };

        if next.table_closed() {
            State::Outside
        } else {
            next
        }
    }

    fn table_closed(&self) -> bool {
        match self {
            State::Outside => false,
            State::InTableBlock(table)
            | State::InRelationshipsArray(table)
            | State::InRelationshipObject(table, _) => table.depth <= 0,
        }
    }
}

//! Localization call extraction from C# syntax trees.
//!
//! Matching is purely lexical: a call site qualifies by the text of its member
//! or type name, with no type binding, namespace or alias resolution. Any
//! unrelated method that happens to be called `GetText` is matched too.
//!
//! Qualifying shapes:
//! - `expr.GetText(args)` and `expr.GetText<T>(args)`
//! - `new LocalizedText(args)` with an unqualified, non-generic type name
//!
//! `GetText(args)` without a receiver and `expr?.GetText(args)` do not qualify.
//!
//! Preprocessor conditionals are not evaluated: the grammar keeps every branch
//! of `#if`/`#else` in the tree, so calls in all branches are extracted.

use std::{fs, path::Path};

use tree_sitter::Node;

use crate::config::Config;
use crate::core::error::{ExtractError, Result};
use crate::core::extract::{Occurrences, RawLocalizeCall, SourceKind, TextExtractor};
use crate::core::parsers::csharp::{CSharpParser, ParsedCSharp, string_literal_value};

pub struct CSharpExtractor {
    parser: CSharpParser,
    call_name: String,
    type_name: String,
}

impl CSharpExtractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            parser: CSharpParser::new()?,
            call_name: config.call_name.clone(),
            type_name: config.type_name.clone(),
        })
    }

    /// Scan C# source already loaded into memory.
    pub fn extract_source(&mut self, path: &Path, source: String) -> Result<Occurrences> {
        let parsed = self.parser.parse(path, source)?;
        let calls = collect_calls(&parsed, &self.call_name, &self.type_name);

        let file_path = path.to_path_buf();
        Ok(Occurrences::new(
            calls
                .into_iter()
                .filter_map(move |call| call.into_text_info(&file_path)),
        ))
    }
}

impl TextExtractor for CSharpExtractor {
    fn source_kind(&self) -> SourceKind {
        SourceKind::CSharp
    }

    fn extract(&mut self, path: &Path) -> Result<Occurrences> {
        let source = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        self.extract_source(path, source)
    }
}

/// Walk the tree in document order (pre-order) and collect qualifying calls.
fn collect_calls(
    parsed: &ParsedCSharp,
    call_name: &str,
    type_name: &str,
) -> Vec<RawLocalizeCall> {
    let mut calls = Vec::new();
    let mut cursor = parsed.root().walk();

    loop {
        if let Some(call) = match_call(cursor.node(), parsed, call_name, type_name) {
            calls.push(call);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return calls;
            }
        }
    }
}

fn match_call(
    node: Node<'_>,
    parsed: &ParsedCSharp,
    call_name: &str,
    type_name: &str,
) -> Option<RawLocalizeCall> {
    match node.kind() {
        "invocation_expression" => {
            let function = node
                .child_by_field_name("function")
                .or_else(|| node.named_child(0))?;
            if function.kind() != "member_access_expression"
                || member_name(function, parsed)? != call_name
            {
                return None;
            }
        }
        "object_creation_expression" => {
            let ty = node
                .child_by_field_name("type")
                .or_else(|| node.named_child(0))?;
            if ty.kind() != "identifier" || parsed.text(ty).trim_start_matches('@') != type_name {
                return None;
            }
        }
        _ => return None,
    }

    let arguments = argument_list(node)?;
    let (literals, argument_count) = literal_arguments(arguments, parsed);

    // The argument list's parent is the whole invocation/creation expression,
    // whose first line stays stable however the call is wrapped.
    let anchor = arguments.parent().unwrap_or(node);

    Some(RawLocalizeCall {
        line: anchor.start_position().row + 1,
        literals,
        argument_count,
    })
}

/// Identifier text of `expr.Name` or `expr.Name<T>`.
fn member_name<'a>(member: Node<'_>, parsed: &'a ParsedCSharp) -> Option<&'a str> {
    let name = member
        .child_by_field_name("name")
        .or_else(|| last_named_child(member))?;

    match name.kind() {
        "identifier" => Some(parsed.text(name)),
        "generic_name" => {
            let identifier = name.named_child(0)?;
            (identifier.kind() == "identifier").then(|| parsed.text(identifier))
        }
        _ => None,
    }
}

fn argument_list(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == "argument_list")
}

/// String literal values among the arguments, plus the total argument count.
fn literal_arguments(arguments: Node<'_>, parsed: &ParsedCSharp) -> (Vec<String>, usize) {
    let mut literals = Vec::new();
    let mut count = 0;

    let mut cursor = arguments.walk();
    for argument in arguments
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "argument")
    {
        count += 1;
        // `name: value` keeps the value as the last named child.
        let value = last_named_child(argument);
        if let Some(literal) = value.and_then(|v| string_literal_value(v, &parsed.source)) {
            literals.push(literal);
        }
    }

    (literals, count)
}

fn last_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).last()
}

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::core::error::{ExtractError, Result};

/// A C# source file parsed into a tree-sitter syntax tree.
///
/// The tree only borrows byte ranges, so the source text is kept alongside it.
pub struct ParsedCSharp {
    pub tree: Tree,
    pub source: String,
}

impl ParsedCSharp {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }
}

/// Reusable C# parser.
///
/// The tree-sitter parser is created once per run and fed every `.cs` file.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|e| ExtractError::Language(format!("{:?}", e)))?;
        Ok(Self { parser })
    }

    /// Parse C# source code into a syntax tree.
    ///
    /// Fails with [`ExtractError::Syntax`] when the tree contains any error or
    /// missing node, pointing at the first one in document order.
    pub fn parse(&mut self, path: &Path, source: String) -> Result<ParsedCSharp> {
        let source = if source.starts_with('\u{feff}') {
            source['\u{feff}'.len_utf8()..].to_string()
        } else {
            source
        };
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ExtractError::Language("parsing was cancelled".to_string()))?;

        if let Some(node) = first_error_node(tree.root_node()) {
            let position = node.start_position();
            return Err(ExtractError::Syntax {
                path: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(ParsedCSharp { tree, source })
    }
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    Some(node)
}

/// Value of a string literal node, or `None` if the node is not a plain string
/// literal.
///
/// Regular, verbatim and raw literals count. Interpolated strings and UTF-8
/// literals (`"..."u8`) do not.
pub fn string_literal_value(node: Node<'_>, source: &str) -> Option<String> {
    let text = node.utf8_text(source.as_bytes()).ok()?;
    match node.kind() {
        "string_literal" => regular_literal_value(text),
        "verbatim_string_literal" => verbatim_literal_value(text),
        "raw_string_literal" => raw_literal_value(text),
        _ => None,
    }
}

fn regular_literal_value(text: &str) -> Option<String> {
    if text.ends_with("u8") || text.ends_with("U8") {
        return None;
    }
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    Some(unescape(inner))
}

fn verbatim_literal_value(text: &str) -> Option<String> {
    let inner = text.strip_prefix("@\"")?.strip_suffix('"')?;
    Some(inner.replace("\"\"", "\""))
}

fn raw_literal_value(text: &str) -> Option<String> {
    let quotes = text.bytes().take_while(|b| *b == b'"').count();
    if quotes < 3 || text.len() < quotes * 2 {
        return None;
    }
    let inner = &text[quotes..text.len() - quotes];

    // Single-line form: """text"""
    let Some(body) = inner
        .strip_prefix("\r\n")
        .or_else(|| inner.strip_prefix('\n'))
    else {
        return Some(inner.to_string());
    };

    // Multi-line form: the closing line's whitespace is the indentation to strip.
    let (content, indent) = match body.rfind('\n') {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => return Some(String::new()),
    };
    let content = content.strip_suffix('\r').unwrap_or(content);

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.strip_prefix(indent).unwrap_or(line)
        })
        .collect();
    Some(lines.join("\n"))
}

/// Decode C# escape sequences of a regular string literal.
///
/// Unknown or truncated escapes are kept verbatim.
fn unescape(inner: &str) -> String {
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            value.push('\\');
            break;
        };
        match escape {
            '\'' => value.push('\''),
            '"' => value.push('"'),
            '\\' => value.push('\\'),
            '0' => value.push('\0'),
            'a' => value.push('\u{07}'),
            'b' => value.push('\u{08}'),
            'e' => value.push('\u{1B}'),
            'f' => value.push('\u{0C}'),
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            'v' => value.push('\u{0B}'),
            'u' | 'U' | 'x' => {
                let (min, max) = match escape {
                    'u' => (4, 4),
                    'U' => (8, 8),
                    _ => (1, 4),
                };
                let mut digits = String::new();
                while digits.len() < max {
                    match chars.peek() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let decoded = (digits.len() >= min)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => value.push(ch),
                    None => {
                        value.push('\\');
                        value.push(escape);
                        value.push_str(&digits);
                    }
                }
            }
            other => {
                value.push('\\');
                value.push(other);
            }
        }
    }

    value
}

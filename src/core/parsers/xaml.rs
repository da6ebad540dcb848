use std::path::Path;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{
    error::{ExtractError, Result},
    utils::LineIndex,
};

/// An element of a XAML document with its attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XamlElement {
    /// 1-based line of the element's start tag.
    pub line: usize,
    /// Entity-unescaped attribute values, in source order.
    pub attribute_values: Vec<String>,
}

/// Parse XAML source into its elements, in document order.
///
/// The whole document is checked before anything is returned, so a malformed
/// file never yields partial results. Besides the reader's own checks
/// (mismatched end tags, broken attributes) the document must have exactly one
/// root element and no text outside of it.
pub fn parse_xaml_source(path: &Path, content: &str) -> Result<Vec<XamlElement>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let line_index = LineIndex::new(content);

    let mut reader = Reader::from_str(content);
    reader.config_mut().check_end_names = true;

    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        let start = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(ExtractError::Xml {
                    path: path.to_path_buf(),
                    position: reader.error_position() as usize,
                    source,
                });
            }
        };
        let line = line_index.line_of(start);

        match event {
            Event::Start(e) => {
                enter_element(path, depth, &mut roots, line)?;
                elements.push(read_element(path, &e, line)?);
                depth += 1;
            }
            Event::Empty(e) => {
                enter_element(path, depth, &mut roots, line)?;
                elements.push(read_element(path, &e, line)?);
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) if depth == 0 => {
                if text.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(ExtractError::markup(
                        path,
                        line,
                        "text outside the root element",
                    ));
                }
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(ExtractError::markup(
                        path,
                        line_index.line_count(),
                        "unexpected end of document, unclosed element",
                    ));
                }
                if roots == 0 {
                    return Err(ExtractError::markup(path, 1, "no root element"));
                }
                break;
            }
            _ => {}
        }
    }

    Ok(elements)
}

/// Count root elements; a second one at depth 0 is an error.
fn enter_element(path: &Path, depth: usize, roots: &mut usize, line: usize) -> Result<()> {
    if depth > 0 {
        return Ok(());
    }
    if *roots > 0 {
        return Err(ExtractError::markup(path, line, "multiple root elements"));
    }
    *roots += 1;
    Ok(())
}

fn read_element(path: &Path, start: &BytesStart<'_>, line: usize) -> Result<XamlElement> {
    let xml_error = |source: quick_xml::Error| ExtractError::Xml {
        path: path.to_path_buf(),
        position: 0,
        source,
    };

    let mut attribute_values = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(e.into()))?;
        let value = attr.unescape_value().map_err(xml_error)?;
        attribute_values.push(value.into_owned());
    }

    Ok(XamlElement {
        line,
        attribute_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<XamlElement>> {
        parse_xaml_source(Path::new("/src/View.xaml"), content)
    }

    #[test]
    fn test_elements_in_document_order_with_lines() {
        let elements = parse(
            r#"<UserControl x:Class="App.View"
    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml">
  <StackPanel>
    <TextBlock Text="first" />
    <Button
        Content="second" />
  </StackPanel>
</UserControl>
"#,
        )
        .unwrap();

        let lines: Vec<usize> = elements.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4, 5]);
        assert_eq!(elements[2].attribute_values, vec!["first"]);
        assert_eq!(elements[3].attribute_values, vec!["second"]);
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let elements = parse(r#"<Root Title="Fish &amp; Chips &apos;n&apos; more" />"#).unwrap();
        assert_eq!(elements[0].attribute_values, vec!["Fish & Chips 'n' more"]);
    }

    #[test]
    fn test_declaration_and_comments_are_skipped() {
        let elements = parse(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- header -->\n<Root>\n  <Child/>\n</Root>\n",
        )
        .unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].line, 3);
        assert_eq!(elements[1].line, 4);
    }

    #[test]
    fn test_mismatched_end_tag_is_error() {
        assert!(matches!(
            parse("<Root><Child></Other></Root>"),
            Err(ExtractError::Xml { .. })
        ));
    }

    #[test]
    fn test_unclosed_element_is_error() {
        assert!(parse("<Root>\n  <Child>\n</Child>\n").is_err());
    }

    #[test]
    fn test_multiple_roots_is_error() {
        assert!(matches!(
            parse("<First/>\n<Second/>"),
            Err(ExtractError::Markup { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_document_is_error() {
        assert!(matches!(parse("  \n"), Err(ExtractError::Markup { .. })));
    }

    #[test]
    fn test_text_outside_root_is_error() {
        assert!(matches!(
            parse("<Root/> trailing"),
            Err(ExtractError::Markup { .. })
        ));
    }
}

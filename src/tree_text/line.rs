//! Grammar of a single line of tree text: `<indent><connector><kind>[ (<value>)]`.

/// Characters that may precede a node label: indentation and connector heads.
const DRAWING_CHARS: [char; 3] = [' ', '|', '+'];
const CONNECTOR_TAIL: &str = "-- ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub indent: usize,
    pub kind: &'a str,
    pub value: Option<&'a str>,
}

pub fn parse_line(line: &str) -> TreeLine<'_> {
    let indent = indentation(line);
    let (kind, value) = split_label(strip_connector(&line[indent..]));
    TreeLine {
        indent,
        kind,
        value,
    }
}

/// Number of leading drawing characters.
pub fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(DRAWING_CHARS).len()
}

pub fn strip_connector(text: &str) -> &str {
    text.strip_prefix(CONNECTOR_TAIL).unwrap_or(text)
}

/// Splits `Kind (value)` at the first `(` and the last `)` after it.
pub fn split_label(label: &str) -> (&str, Option<&str>) {
    let Some(open) = label.find('(') else {
        return (label.trim(), None);
    };
    let rest = &label[open + 1..];
    let value = match rest.rfind(')') {
        Some(close) => &rest[..close],
        None => rest,
    };
    (label[..open].trim(), Some(value))
}

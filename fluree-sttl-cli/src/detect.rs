use crate::error::{CliError, CliResult};
use std::path::Path;

/// RDF text syntax of the input (and output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Turtle,
    TriG,
}

/// Detect data format from file extension and content.
///
/// Priority: explicit `--format` flag > file extension > content sniffing.
pub fn detect_data_format(
    path: Option<&Path>,
    content: &str,
    explicit: Option<&str>,
) -> CliResult<DataFormat> {
    // Explicit flag
    if let Some(fmt) = explicit {
        return match fmt.to_lowercase().as_str() {
            "turtle" | "ttl" => Ok(DataFormat::Turtle),
            "trig" => Ok(DataFormat::TriG),
            other => Err(CliError::Usage(format!(
                "unknown data format '{other}'\n  {} valid formats: turtle, trig",
                colored::Colorize::bold(colored::Colorize::cyan("help:"))
            ))),
        };
    }

    // File extension
    if let Some(p) = path {
        if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
            return Ok(match ext.to_lowercase().as_str() {
                "ttl" => DataFormat::Turtle,
                "trig" => DataFormat::TriG,
                _ => sniff_data_format(content),
            });
        }
    }

    // Content sniffing
    Ok(sniff_data_format(content))
}

/// TriG if a `{` occurs outside IRIs, strings and comments.
fn sniff_data_format(content: &str) -> DataFormat {
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => return DataFormat::TriG,
            b'<' => i = skip_past(bytes, i + 1, b">"),
            b'#' => i = skip_past(bytes, i + 1, b"\n"),
            quote @ (b'"' | b'\'') => {
                let long = [quote; 3];
                i = if bytes[i..].starts_with(&long) {
                    skip_string(bytes, i + 3, &long)
                } else {
                    skip_string(bytes, i + 1, &long[..1])
                };
            }
            _ => i += 1,
        }
    }
    DataFormat::Turtle
}

fn skip_past(bytes: &[u8], from: usize, end: &[u8]) -> usize {
    bytes[from..]
        .windows(end.len())
        .position(|w| w == end)
        .map_or(bytes.len(), |pos| from + pos + end.len())
}

fn skip_string(bytes: &[u8], mut i: usize, end: &[u8]) -> usize {
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
        } else if bytes[i..].starts_with(end) {
            return i + end.len();
        } else {
            i += 1;
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flag_wins() {
        let path = Path::new("data.ttl");
        assert_eq!(
            detect_data_format(Some(path), "", Some("TriG")).unwrap(),
            DataFormat::TriG
        );
        assert!(detect_data_format(None, "", Some("jsonld")).is_err());
    }

    #[test]
    fn test_extension() {
        let content = "<a> <b> <c> .";
        assert_eq!(
            detect_data_format(Some(Path::new("x.trig")), content, None).unwrap(),
            DataFormat::TriG
        );
        assert_eq!(
            detect_data_format(Some(Path::new("x.TTL")), "{ }", None).unwrap(),
            DataFormat::Turtle
        );
    }

    #[test]
    fn test_sniffing_ignores_braces_in_strings_iris_and_comments() {
        let turtle = r#"
            # a comment with { brace
            <http://x/{a}> <http://x/p> "text { here", '''long
            { string''' .
        "#;
        assert_eq!(sniff_data_format(turtle), DataFormat::Turtle);
        assert_eq!(
            sniff_data_format(r#"<http://x/g> { <a> <b> "c\"{" . }"#),
            DataFormat::TriG
        );
        assert_eq!(sniff_data_format(r#""esc \" { still string""#), DataFormat::Turtle);
    }
}

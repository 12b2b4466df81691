//! RFC 3986 reference resolution.
//!
//! Turtle resolves every relative IRI against the in-scope base. The writer
//! needs the inverse for the one case it abbreviates: a reference that is a
//! plain child of a `/`-terminated base.

use crate::error::{Result, TurtleError};

/// Components of an absolute IRI, fragment removed.
struct Components<'a> {
    scheme: &'a str,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
}

/// Check whether `iri` starts with a URI scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`).
pub fn has_scheme(iri: &str) -> bool {
    let Some(colon) = iri.find(':') else {
        return false;
    };
    let scheme = &iri[..colon];
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolve `reference` against `base` (RFC 3986 section 5.2).
///
/// Absolute references are returned unchanged. A relative reference without a
/// base is an error.
pub fn resolve(base: Option<&str>, reference: &str) -> Result<String> {
    if has_scheme(reference) {
        return Ok(reference.to_string());
    }

    let base = base.ok_or_else(|| {
        TurtleError::IriResolution(format!("relative IRI '{}' without base", reference))
    })?;
    let base = split(base);

    let (reference, fragment) = split_fragment(reference);

    let (authority, path, query) = if let Some(rest) = reference.strip_prefix("//") {
        let (authority, path, query) = split_hier(rest);
        (Some(authority.to_string()), remove_dot_segments(path), query)
    } else {
        let (ref_path, ref_query) = split_query(reference);
        let authority = base.authority.map(str::to_string);
        if ref_path.is_empty() {
            (
                authority,
                base.path.to_string(),
                ref_query.or(base.query),
            )
        } else if ref_path.starts_with('/') {
            (authority, remove_dot_segments(ref_path), ref_query)
        } else {
            let merged = if base.authority.is_some() && base.path.is_empty() {
                format!("/{}", ref_path)
            } else {
                let dir = base.path.rfind('/').map_or("", |pos| &base.path[..=pos]);
                format!("{}{}", dir, ref_path)
            };
            (authority, remove_dot_segments(&merged), ref_query)
        }
    };

    let mut result = String::with_capacity(base.scheme.len() + path.len() + 16);
    result.push_str(base.scheme);
    result.push(':');
    if let Some(authority) = authority {
        result.push_str("//");
        result.push_str(&authority);
    }
    result.push_str(&path);
    if let Some(query) = query {
        result.push('?');
        result.push_str(query);
    }
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    Ok(result)
}

/// Express `iri` relative to a `/`-terminated `base`, when that is trivially safe.
///
/// Only plain children are relativized: the remainder must be non-empty and
/// free of `/ ? # :`, and must not start with `.`. Anything else resolves
/// ambiguously and is left absolute.
pub fn relativize<'a>(base: &str, iri: &'a str) -> Option<&'a str> {
    if !base.ends_with('/') {
        return None;
    }
    let rest = iri.strip_prefix(base)?;
    let plain = !rest.is_empty()
        && !rest.starts_with('.')
        && !rest.contains(['/', '?', '#', ':']);
    plain.then_some(rest)
}

fn split(iri: &str) -> Components<'_> {
    let (iri, _) = split_fragment(iri);
    let (scheme, rest) = match iri.find(':') {
        Some(pos) => (&iri[..pos], &iri[pos + 1..]),
        None => ("", iri),
    };
    match rest.strip_prefix("//") {
        Some(hier) => {
            let (authority, path, query) = split_hier(hier);
            Components {
                scheme,
                authority: Some(authority),
                path,
                query,
            }
        }
        None => {
            let (path, query) = split_query(rest);
            Components {
                scheme,
                authority: None,
                path,
                query,
            }
        }
    }
}

/// Split the part after `//` into (authority, path, query).
fn split_hier(s: &str) -> (&str, &str, Option<&str>) {
    let end = s.find(['/', '?']).unwrap_or(s.len());
    let (path, query) = split_query(&s[end..]);
    (&s[..end], path, query)
}

fn split_query(s: &str) -> (&str, Option<&str>) {
    match s.find('?') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

fn split_fragment(s: &str) -> (&str, Option<&str>) {
    match s.find('#') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// Remove dot segments from a path (RFC 3986 section 5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." | ".." => {
                if *segment == ".." && output.len() > 1 {
                    output.pop();
                }
                // A trailing dot segment still denotes a directory
                if i == last {
                    output.push("");
                }
            }
            s => output.push(s),
        }
    }

    let result = output.join("/");
    if path.starts_with('/') && !result.starts_with('/') {
        format!("/{}", result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://a/b/c/d;p?q";

    fn r(reference: &str) -> String {
        resolve(Some(BASE), reference).unwrap()
    }

    #[test]
    fn test_rfc3986_normal_examples() {
        assert_eq!(r("g:h"), "g:h");
        assert_eq!(r("g"), "http://a/b/c/g");
        assert_eq!(r("./g"), "http://a/b/c/g");
        assert_eq!(r("g/"), "http://a/b/c/g/");
        assert_eq!(r("/g"), "http://a/g");
        assert_eq!(r("//g"), "http://g");
        assert_eq!(r("?y"), "http://a/b/c/d;p?y");
        assert_eq!(r("g?y"), "http://a/b/c/g?y");
        assert_eq!(r("#s"), "http://a/b/c/d;p?q#s");
        assert_eq!(r("g#s"), "http://a/b/c/g#s");
        assert_eq!(r(""), "http://a/b/c/d;p?q");
        assert_eq!(r("."), "http://a/b/c/");
        assert_eq!(r(".."), "http://a/b/");
        assert_eq!(r("../g"), "http://a/b/g");
        assert_eq!(r("../.."), "http://a/");
        assert_eq!(r("../../g"), "http://a/g");
    }

    #[test]
    fn test_relative_without_base_fails() {
        assert!(matches!(
            resolve(None, "foo"),
            Err(TurtleError::IriResolution(_))
        ));
        assert_eq!(resolve(None, "urn:x").unwrap(), "urn:x");
    }

    #[test]
    fn test_relativize() {
        let base = "http://example.org/";
        assert_eq!(relativize(base, "http://example.org/alice"), Some("alice"));
        assert_eq!(relativize(base, "http://example.org/a/b"), None);
        assert_eq!(relativize(base, "http://example.org/"), None);
        assert_eq!(relativize(base, "http://example.org/#x"), None);
        assert_eq!(relativize(base, "http://example.org/..x"), None);
        assert_eq!(relativize("http://example.org/doc", "http://example.org/docx"), None);
        assert_eq!(relativize(base, "http://other.org/alice"), None);
    }

    #[test]
    fn test_relativize_round_trips() {
        let base = "http://example.org/path/";
        let iri = "http://example.org/path/item-1";
        let rel = relativize(base, iri).unwrap();
        assert_eq!(resolve(Some(base), rel).unwrap(), iri);
    }
}

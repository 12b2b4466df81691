//! Policy configuration: TOML file plus command-line overrides.

use crate::cli::LayoutArgs;
use crate::error::{CliError, CliResult};
use fluree_graph_format::{LayoutPolicy, OrderingPolicy, PolicyConfig};
use std::path::Path;
use tracing::debug;

/// Read a policy configuration file; no path means all defaults.
pub fn load_config(path: Option<&Path>) -> CliResult<PolicyConfig> {
    let Some(path) = path else {
        return Ok(PolicyConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    let config = parse_config(&text)
        .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn parse_config(text: &str) -> Result<PolicyConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Apply command-line layout flags over the file's layout.
pub fn apply_overrides(layout: &mut LayoutPolicy, args: &LayoutArgs) {
    if let Some(indent) = args.indent {
        layout.indent_base = indent;
    }
    if let Some(width) = args.predicate_width {
        layout.predicate_width = width;
    }
    if args.only_used_prefixes {
        layout.only_used_prefixes = true;
    }
    if args.objects_multi_line {
        layout.objects_multi_line = true;
    }
    if args.dot_on_new_line {
        layout.dot_on_new_line = true;
    }
}

/// Build the ordering policy for one run.
pub fn build_policy(path: Option<&Path>, args: &LayoutArgs) -> CliResult<OrderingPolicy> {
    let mut config = load_config(path)?;
    apply_overrides(&mut config.layout, args);
    Ok(config.into_policy()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluree_graph_format::CollationKind;

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"
            [ordering]
            collation = "codepoint"
            namespace_default_priority = 3
            complex_predicates = ["http://example.org/key"]

            [ordering.namespace_priorities]
            "http://example.org/" = 1

            [layout]
            indent_base = 3
            only_used_prefixes = true
            "#,
        )
        .unwrap();

        assert_eq!(config.ordering.collation, CollationKind::Codepoint);
        assert_eq!(config.ordering.namespace_default_priority, Some(3));
        assert_eq!(config.ordering.namespace_priorities["http://example.org/"], 1);
        assert_eq!(config.layout.indent_base, 3);
        assert!(config.layout.only_used_prefixes);
        // Unset keys keep their defaults
        assert_eq!(config.layout.predicate_width, 14);
    }

    #[test]
    fn test_unknown_collation_is_rejected() {
        assert!(parse_config("[ordering]\ncollation = \"klingon\"\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut layout = LayoutPolicy {
            indent_base: 3,
            ..LayoutPolicy::default()
        };
        let args = LayoutArgs {
            indent: Some(2),
            dot_on_new_line: true,
            ..LayoutArgs::default()
        };
        apply_overrides(&mut layout, &args);
        assert_eq!(layout.indent_base, 2);
        assert!(layout.dot_on_new_line);
        assert!(!layout.objects_multi_line);
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Some(Path::new("/nonexistent/sttl.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}

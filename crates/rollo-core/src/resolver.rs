//! Locating the dependency path a revision variable governs

use indexmap::IndexMap;
use rollo_manifest::Value;

/// Find the first dependency path whose specification embeds `revision`.
///
/// The downstream variable's value is typically embedded verbatim inside
/// one dependency's URL or structured record; substring-matching the
/// stringified specification recovers which path that variable governs
/// without an explicit variable-to-path index. Iteration follows
/// declaration order and the first match wins.
pub fn find_path_for_revision<'a>(
    deps: &'a IndexMap<String, Value>,
    revision: &str,
) -> Option<&'a str> {
    deps.iter()
        .find(|(_, spec)| spec.to_string().contains(revision))
        .map(|(path, _)| path.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollo_manifest::parse;

    #[test]
    fn test_finds_path_embedding_revision() {
        let manifest = parse(
            r#"
deps = {
  'third_party/a': 'https://example/a@aaa',
  'third_party/b': 'https://example/b@bbb',
}
"#,
        )
        .unwrap();
        assert_eq!(find_path_for_revision(&manifest.deps, "bbb"), Some("third_party/b"));
    }

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let manifest = parse(
            r#"
deps = {
  'z/shared': 'https://example/z@abc',
  'a/shared': 'https://example/a@abc',
}
"#,
        )
        .unwrap();
        assert_eq!(find_path_for_revision(&manifest.deps, "abc"), Some("z/shared"));
    }

    #[test]
    fn test_matches_inside_structured_records() {
        let manifest = parse(
            r#"
deps = {
  'buildtools/gn': {
    'packages': [ { 'package': 'gn/gn', 'version': 'git_revision:abc' } ],
    'dep_type': 'cipd',
  },
}
"#,
        )
        .unwrap();
        assert_eq!(
            find_path_for_revision(&manifest.deps, "git_revision:abc"),
            Some("buildtools/gn")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let manifest = parse("deps = { 'a': 'https://example/a@aaa' }").unwrap();
        assert_eq!(find_path_for_revision(&manifest.deps, "zzz"), None);
    }
}

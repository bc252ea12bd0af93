//! Placeholder substitution for path templates.
//!
//! Example: "/videos/{video_id}" with video_id=12345  =>  "/videos/12345"
//!
//! Only names present in the table are replaced. Anything else in braces is
//! left in the path untouched.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}/]+)\}").expect("placeholder regex is valid"));

const DEFAULT_PLACEHOLDERS: &[(&str, &str)] = &[
    ("video_id", "12345"),
    ("id", "1"),
    ("category", "music"),
    ("username", "admin"),
    ("pornstar_name", "sample-name"),
    ("keyword", "sample"),
    ("q", "latest"),
];

/// Known placeholder names and the literal values substituted for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTable(BTreeMap<String, String>);

impl Default for PlaceholderTable {
    fn default() -> Self {
        Self(
            DEFAULT_PLACEHOLDERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl PlaceholderTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or override an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<N: Into<String>, V: Into<String>> Extend<(N, V)> for PlaceholderTable {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Replace every known `{name}` in `template` with its table value.
pub fn materialize_path(template: &str, table: &PlaceholderTable) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match table.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Parse a `name=value` CLI argument into a placeholder entry.
pub fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", s))?;

    let name = name.trim().trim_start_matches('{').trim_end_matches('}');
    if name.is_empty() {
        return Err(format!("placeholder name is empty in {:?}", s));
    }

    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_known_placeholder() {
        let table = PlaceholderTable::default();
        assert_eq!(
            materialize_path("/videos/{video_id}", &table),
            "/videos/12345"
        );
    }

    #[test]
    fn default_table_covers_every_known_name() {
        let table = PlaceholderTable::default();
        let path = materialize_path(
            "/{video_id}/{id}/{category}/{username}/{pornstar_name}/{keyword}/{q}",
            &table,
        );
        assert!(!path.contains('{'), "unreplaced placeholder in {}", path);
        assert_eq!(
            materialize_path("/pornstars/{pornstar_name}", &table),
            "/pornstars/sample-name"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let table = PlaceholderTable::default();
        assert_eq!(
            materialize_path("/users/{username}/follows/{username}", &table),
            "/users/admin/follows/admin"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let table = PlaceholderTable::default();
        assert_eq!(
            materialize_path("/categories/{category}/{slug}", &table),
            "/categories/music/{slug}"
        );
    }

    #[test]
    fn substitution_is_per_token_and_idempotent() {
        let table = PlaceholderTable::default();
        let once = materialize_path("/search/{keyword}/{id}", &table);
        let twice = materialize_path(&once, &table);
        assert_eq!(once, "/search/sample/1");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_table_changes_nothing() {
        let table = PlaceholderTable::empty();
        assert_eq!(
            materialize_path("/videos/{video_id}", &table),
            "/videos/{video_id}"
        );
    }

    #[test]
    fn extend_overrides_defaults() {
        let mut table = PlaceholderTable::default();
        table.extend([("video_id", "999"), ("slug", "intro")]);
        assert_eq!(
            materialize_path("/videos/{video_id}/{slug}", &table),
            "/videos/999/intro"
        );
    }

    #[test]
    fn parses_assignments() {
        assert_eq!(
            parse_assignment("slug=intro").unwrap(),
            ("slug".to_string(), "intro".to_string())
        );
        assert_eq!(
            parse_assignment("{video_id}=7").unwrap(),
            ("video_id".to_string(), "7".to_string())
        );
        assert_eq!(
            parse_assignment("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("no-equals").is_err());
        assert!(parse_assignment("=value").is_err());
    }
}

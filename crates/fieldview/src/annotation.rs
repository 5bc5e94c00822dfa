//! Access annotations and tag matching.
//!
//! An access annotation is the string a field carries in `#[access = "..."]`:
//! a comma separated list of view tags. Tokens are trimmed of surrounding
//! whitespace and empty tokens are ignored, so `"pub, priv,"` lists exactly
//! `pub` and `priv`.
//!
//! ## Matching
//!
//! | Mode        | Rule                                         | `create` vs `"recreate"` |
//! |-------------|----------------------------------------------|--------------------------|
//! | `Token`     | tag equals one annotation token              | no match                 |
//! | `Substring` | raw annotation contains the tag              | match                    |
//!
//! `Token` is the default. `Substring` reproduces the legacy rule for
//! fixtures written against it; under that rule an empty tag matches every
//! field.

use serde::{Deserialize, Serialize};

/// Separator between tags in an access annotation.
pub const DELIMITER: char = ',';

/// How a view's tag is compared against a field's annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagMatch {
    /// Exact membership in the annotation's token set.
    #[default]
    Token,
    /// Legacy substring containment over the raw annotation.
    Substring,
}

impl TagMatch {
    /// Returns `true` if `annotation` admits `tag` under this mode.
    pub fn matches(self, annotation: &str, tag: &str) -> bool {
        match self {
            TagMatch::Token => AccessAnnotation::new(annotation).contains(tag),
            TagMatch::Substring => annotation.contains(tag),
        }
    }
}

/// Borrowed view over a field's access annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessAnnotation<'a> {
    raw: &'a str,
}

impl<'a> AccessAnnotation<'a> {
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The annotation exactly as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Iterates over the annotation's tags in written order.
    pub fn tokens(self) -> impl Iterator<Item = &'a str> + 'a {
        self.raw
            .split(DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Returns `true` if `tag` is one of the annotation's tokens.
    ///
    /// Surrounding whitespace in `tag` is ignored, like it is in the
    /// annotation's tokens, so `" pub"` matches `pub`. An empty tag is never
    /// a member.
    pub fn contains(&self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.tokens().any(|token| token == tag)
    }

    /// Returns `true` if the annotation lists no tags at all.
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_tokens_trim_and_skip_empty() {
        let annotation = AccessAnnotation::new(" pub, priv,,create ,");
        let tokens: Vec<&str> = annotation.tokens().collect();
        assert_eq!(tokens, vec!["pub", "priv", "create"]);
    }

    #[test]
    fn test_empty_annotation() {
        assert!(AccessAnnotation::new("").is_empty());
        assert!(AccessAnnotation::new(" , ,").is_empty());
        assert!(!AccessAnnotation::new("pub").is_empty());
    }

    #[test_case("pub,priv,create,update", "create", true; "listed tag")]
    #[test_case("priv,create", "pub", false; "unlisted tag")]
    #[test_case("recreate", "create", false; "no partial token match")]
    #[test_case("notPurchaserOnly2", "purchaserOnly", false; "no embedded match")]
    #[test_case("pub", "", false; "empty tag never matches")]
    #[test_case("", "", false; "empty tag against empty annotation")]
    #[test_case("pub,priv", " pub ", true; "padded tag is trimmed")]
    fn test_token_matching(annotation: &str, tag: &str, expected: bool) {
        assert_eq!(TagMatch::Token.matches(annotation, tag), expected);
    }

    #[test_case("recreate", "create", true; "partial token matches")]
    #[test_case("notPurchaserOnly2", "purchaserOnly", false; "case sensitive")]
    #[test_case("notpurchaserOnly2", "purchaserOnly", true; "embedded match")]
    #[test_case("pub", "", true; "empty tag matches everything")]
    #[test_case("", "", true; "empty tag against empty annotation")]
    #[test_case("priv,create", "pub", false; "unlisted tag")]
    fn test_substring_matching(annotation: &str, tag: &str, expected: bool) {
        assert_eq!(TagMatch::Substring.matches(annotation, tag), expected);
    }

    #[test]
    fn test_tag_match_deserializes_kebab_case() {
        let mode: TagMatch = serde_json::from_str("\"substring\"").unwrap();
        assert_eq!(mode, TagMatch::Substring);
        assert_eq!(TagMatch::default(), TagMatch::Token);
    }

    proptest! {
        #[test]
        fn prop_every_token_is_contained(tags in prop::collection::vec("[a-z]{1,8}", 1..6)) {
            let raw = tags.join(",");
            let annotation = AccessAnnotation::new(&raw);
            for tag in &tags {
                prop_assert!(annotation.contains(tag));
            }
        }

        #[test]
        fn prop_token_match_implies_substring_match(
            tags in prop::collection::vec("[a-z]{1,8}", 0..6),
            tag in "[a-z]{1,8}",
        ) {
            let raw = tags.join(",");
            if TagMatch::Token.matches(&raw, &tag) {
                prop_assert!(TagMatch::Substring.matches(&raw, &tag));
            }
        }
    }
}

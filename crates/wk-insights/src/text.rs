//! Mnemonic text helpers.

use regex::Regex;
use std::sync::LazyLock;

/// Markup such as `<radical>ground</radical>` or `<ja>一</ja>`.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Remove markup tags from mnemonic or hint text, keeping their contents.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

//! URL fragment extraction
//!
//! A fragment is the `#...` part of a link. Only the first run of characters
//! after a `#` up to the next `?` or `&` counts, so `page#intro?x=1` and
//! `page#intro` both name `#intro`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `#` followed by everything up to the next `?` or `&`
static FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[^?&]+").unwrap());

/// Extract the fragment of a URL, including its leading `#`.
///
/// Returns `None` when the URL has no `#` followed by at least one
/// non-terminator character. A bare `#` or `#?x` is skipped and the scan
/// continues with the next `#`.
pub fn extract_fragment(url: &str) -> Option<&str> {
    FRAGMENT.find(url).map(|m| m.as_str())
}

/// Extract a fragment from an optional link target.
///
/// Anchors without an `href` read as `None`, same as links without a fragment.
pub fn extract_link_fragment(href: Option<&str>) -> Option<String> {
    href.and_then(extract_fragment).map(str::to_owned)
}

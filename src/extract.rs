//! Extraction of JPG image links from an HTML page.
//!
//! This is a lightweight pattern scan, not a markup parser: it looks for
//! the first quoted string following `src=` inside any tag that begins
//! with `<img` and keeps the match when it ends in `.jpg`. Malformed
//! markup simply yields fewer or zero matches; extraction never fails.

use regex::Regex;
use std::sync::LazyLock;

/// Quoted `src` value of an `<img>` tag ending in `.jpg`, non-greedy up to
/// the attribute.
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img.+?src="(\S+?\.jpg)""#).expect("img src pattern is valid")
});

/// Scan `html` for `<img>` tags whose `src` ends in `.jpg`.
///
/// Returns the referenced URIs (absolute or relative) in document order,
/// duplicates included.
///
/// # Examples
///
/// ```rust
/// use imgrab::extract_jpg_links;
///
/// let html = r#"<html><img src="a.jpg"><img alt="x" src="b.jpg"></html>"#;
/// assert_eq!(extract_jpg_links(html), vec!["a.jpg", "b.jpg"]);
/// ```
pub fn extract_jpg_links(html: &str) -> Vec<String> {
    IMG_SRC
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

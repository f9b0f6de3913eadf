//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract the targets of every `<a href="...">` in a page.
///
/// Relative targets are resolved against the directory of `source_path` so
/// they line up with corpus page identifiers. Absolute URLs, fragment-only
/// anchors and other schemes are skipped. Self-links are left in; the corpus
/// graph removes them.
pub fn extract_links(content: &str, source_path: &str) -> BTreeSet<String> {
    let mut links = BTreeSet::new();

    for cap in ANCHOR_HREF_RE.captures_iter(content) {
        if let Some(target) = cap.get(1) {
            let target_str = target.as_str();

            if target_str.is_empty() || target_str.starts_with('#') {
                continue;
            }

            if has_scheme(target_str) {
                continue;
            }

            if let Some(normalized) = normalize_path(target_str, source_path) {
                links.insert(normalized);
            }
        }
    }

    links
}

fn has_scheme(target: &str) -> bool {
    target.starts_with("//")
        || target
            .split_once(':')
            .map(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
            .unwrap_or(false)
}

/// Resolve a relative link to a corpus-relative identifier
fn normalize_path(target: &str, source_path: &str) -> Option<String> {
    let source_dir = Path::new(source_path).parent().unwrap_or(Path::new(""));

    let target_path = Path::new(target);
    let resolved = if target_path.is_relative() {
        source_dir.join(target_path)
    } else {
        target_path.strip_prefix("/").ok()?.to_path_buf()
    };

    let normalized = normalize_pathbuf(&resolved)?;
    let id = normalized
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Collapse `.` and `..` components. A `..` that would climb above the
/// corpus root yields `None`.
fn normalize_pathbuf(path: &Path) -> Option<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop()?;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            _ => components.push(component.as_os_str()),
        }
    }

    Some(components.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_links() {
        let content = r#"<p>See <a href="2.html">two</a> and <a class="x" href="3.html">three</a>.</p>"#;
        let links = extract_links(content, "1.html");

        assert_eq!(links.len(), 2);
        assert!(links.contains("2.html"));
        assert!(links.contains("3.html"));
    }

    #[test]
    fn test_duplicate_links_collapse() {
        let content = r#"<a href="2.html">a</a><a href="2.html">b</a><a href="./2.html">c</a>"#;
        let links = extract_links(content, "1.html");

        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_skips_urls_and_fragments() {
        let content = r##"<a href="https://example.com/x.html">x</a>
            <a href="#top">top</a>
            <a href="mailto:me@example.com">mail</a>
            <a href="//cdn.example.com/y.html">y</a>
            <a href="">empty</a>"##;
        let links = extract_links(content, "1.html");

        assert!(links.is_empty());
    }

    #[test]
    fn test_resolves_relative_to_source_dir() {
        let content = r#"<a href="../index.html">up</a> <a href="guide.html">here</a> <a href="/top.html">root</a>"#;
        let links = extract_links(content, "docs/intro.html");

        assert!(links.contains("index.html"));
        assert!(links.contains("docs/guide.html"));
        assert!(links.contains("top.html"));
    }

    #[test]
    fn test_drops_links_above_root() {
        let links = extract_links(r#"<a href="../x.html">up</a>"#, "1.html");
        assert!(links.is_empty());

        let links = extract_links(r#"<a href="../../2.html">up</a>"#, "docs/1.html");
        assert!(links.is_empty());

        let links = extract_links(r#"<a href="../1.html">same name</a>"#, "1.html");
        assert!(links.is_empty());
    }

    #[test]
    fn test_ignores_non_anchor_href() {
        let content = r#"<link href="style.css"><a name="x">no href</a>"#;
        let links = extract_links(content, "1.html");

        assert!(links.is_empty());
    }
}

//! Corpus construction from a directory of HTML pages

use super::corpus::CorpusGraph;
use super::link_extractor::extract_links;
use crate::config::CrawlConfig;
use crate::error::{Result, SurfRankError};
use glob::Pattern;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A page file found while scanning the corpus directory
#[derive(Debug, Clone)]
pub struct PageFile {
    pub path: PathBuf,
    pub page_id: String,
}

/// Scan `root` for page files matching the crawl pattern
pub fn scan_pages(root: &Path, config: &CrawlConfig) -> Result<Vec<PageFile>> {
    if !root.is_dir() {
        return Err(SurfRankError::Crawl(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let pattern = Pattern::new(&config.pattern)?;
    let mut results = Vec::new();

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, config));

    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let page_id = match path.strip_prefix(root) {
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => continue,
        };

        if pattern.matches(&page_id) {
            results.push(PageFile {
                path: path.to_path_buf(),
                page_id,
            });
        }
    }

    Ok(results)
}

fn should_skip(entry: &DirEntry, config: &CrawlConfig) -> bool {
    config.exclude_hidden && entry.file_name().to_string_lossy().starts_with('.')
}

/// Parse every page under `root` and build the corpus graph.
///
/// Links to pages outside the crawled set and self-links are dropped.
pub fn crawl(root: &Path, config: &CrawlConfig) -> Result<CorpusGraph> {
    let files = scan_pages(root, config)?;
    if files.is_empty() {
        return Err(SurfRankError::InvalidInput(format!(
            "no pages matching '{}' found in {}",
            config.pattern,
            root.display()
        )));
    }

    let mut links: Vec<(String, BTreeSet<String>)> = Vec::with_capacity(files.len());
    for file in files {
        let content = std::fs::read_to_string(&file.path)?;
        let targets = extract_links(&content, &file.page_id);
        links.push((file.page_id, targets));
    }

    let graph = CorpusGraph::from_links(links);
    tracing::info!(
        pages = graph.len(),
        links = graph.link_count(),
        dangling = graph.dangling_indices().len(),
        "Crawled corpus from {}",
        root.display()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, path: &str, content: &str) {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_crawl_top_level_only() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.html", r#"<a href="2.html">2</a> <a href="1.html">me</a>"#);
        write(&dir, "2.html", r#"<a href="1.html">1</a> <a href="nowhere.html">x</a>"#);
        write(&dir, "notes.txt", r#"<a href="1.html">ignored</a>"#);
        write(&dir, "sub/3.html", r#"<a href="../1.html">1</a>"#);

        let graph = crawl(dir.path(), &CrawlConfig::default()).unwrap();

        let pages: Vec<&str> = graph.pages().collect();
        assert_eq!(pages, vec!["1.html", "2.html"]);
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn test_crawl_recursive() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.html", r#"<a href="sub/3.html">3</a>"#);
        write(&dir, "sub/3.html", r#"<a href="../1.html">1</a>"#);
        write(&dir, ".hidden/4.html", r#"<a href="../1.html">1</a>"#);

        let config = CrawlConfig {
            recursive: true,
            ..CrawlConfig::default()
        };
        let graph = crawl(dir.path(), &config).unwrap();

        let pages: Vec<&str> = graph.pages().collect();
        assert_eq!(pages, vec!["1.html", "sub/3.html"]);
        let out: Vec<&str> = graph.outbound("sub/3.html").unwrap().collect();
        assert_eq!(out, vec!["1.html"]);
    }

    #[test]
    fn test_crawl_link_above_root_is_dropped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.html", r#"<a href="2.html">2</a>"#);
        write(&dir, "2.html", r#"<a href="../1.html">outside</a>"#);

        let graph = crawl(dir.path(), &CrawlConfig::default()).unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.link_count(), 1);
        assert!(graph.is_dangling(graph.index_of("2.html").unwrap()));
    }

    #[test]
    fn test_crawl_empty_dir() {
        let dir = TempDir::new().unwrap();
        let err = crawl(dir.path(), &CrawlConfig::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_crawl_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = crawl(&missing, &CrawlConfig::default()).unwrap_err();
        assert!(matches!(err, SurfRankError::Crawl(_)));
    }
}

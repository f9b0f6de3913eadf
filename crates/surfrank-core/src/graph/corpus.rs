//! Immutable page-link graph

use crate::error::{Result, SurfRankError};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Directed hyperlink graph over a corpus of pages.
///
/// Pages are interned into dense indices in sorted identifier order, so every
/// traversal of the graph is deterministic. The constructor drops self-links
/// and links to pages that are not part of the corpus: every outbound target
/// is guaranteed to be a page of the graph.
#[derive(Debug, Clone, Default)]
pub struct CorpusGraph {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    outbound: Vec<Vec<usize>>,
    inbound: Vec<Vec<usize>>,
    dangling: Vec<usize>,
}

impl CorpusGraph {
    /// Build a graph from `(page, outbound links)` pairs.
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_links<I, P, L, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in links {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let pages: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        let mut outbound = Vec::with_capacity(pages.len());
        let mut dropped = 0usize;
        for (source, targets) in &raw {
            let mut resolved = Vec::with_capacity(targets.len());
            for target in targets {
                match index.get(target) {
                    Some(&t) if target != source => resolved.push(t),
                    _ => dropped += 1,
                }
            }
            outbound.push(resolved);
        }

        let mut inbound = vec![Vec::new(); pages.len()];
        for (source, targets) in outbound.iter().enumerate() {
            for &target in targets {
                inbound[target].push(source);
            }
        }

        let dangling = outbound
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        if dropped > 0 {
            tracing::debug!(dropped, "Dropped self-links and links outside the corpus");
        }

        Self {
            pages,
            index,
            outbound,
            inbound,
            dangling,
        }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of links between corpus pages
    pub fn link_count(&self) -> usize {
        self.outbound.iter().map(Vec::len).sum()
    }

    /// Page identifiers in index order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    /// Identifier of the page at `idx`
    pub fn page(&self, idx: usize) -> &str {
        &self.pages[idx]
    }

    /// Outbound links of a page, or `None` if the page is not in the corpus
    pub fn outbound(&self, page: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.index_of(page)?;
        Some(self.outbound[idx].iter().map(move |&t| self.page(t)))
    }

    pub fn outbound_indices(&self, idx: usize) -> &[usize] {
        &self.outbound[idx]
    }

    pub fn inbound_indices(&self, idx: usize) -> &[usize] {
        &self.inbound[idx]
    }

    pub fn out_degree(&self, idx: usize) -> usize {
        self.outbound[idx].len()
    }

    /// Pages without outbound links
    pub fn dangling_indices(&self) -> &[usize] {
        &self.dangling
    }

    pub fn is_dangling(&self, idx: usize) -> bool {
        self.outbound[idx].is_empty()
    }

    /// Resolve a page identifier, failing if it is not part of the corpus
    pub fn require(&self, page: &str) -> Result<usize> {
        self.index_of(page)
            .ok_or_else(|| SurfRankError::PageNotFound(page.to_string()))
    }

    /// Fail with `InvalidInput` on an empty corpus
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(SurfRankError::InvalidInput(
                "corpus must contain at least one page".to_string(),
            ));
        }
        Ok(())
    }

    /// Owned copy of the link mapping, keyed and ordered by page identifier
    pub fn to_links(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.pages
            .iter()
            .zip(&self.outbound)
            .map(|(page, targets)| {
                let set = targets.iter().map(|&t| self.pages[t].clone()).collect();
                (page.clone(), set)
            })
            .collect()
    }
}

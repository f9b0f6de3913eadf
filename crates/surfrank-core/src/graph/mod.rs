//! Corpus graph and its construction from HTML pages

mod corpus;
mod crawl;
mod link_extractor;

pub use corpus::CorpusGraph;
pub use crawl::{crawl, scan_pages, PageFile};
pub use link_extractor::extract_links;

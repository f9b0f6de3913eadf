//! CLI command handlers

pub mod iterate;
pub mod links;
pub mod rank;
pub mod sample;

use crate::app::{CorpusArgs, RankArgs};
use anyhow::Result;
use surfrank_core::{crawl, Config, CorpusGraph};

/// Crawl the corpus directory with config values overridden by flags
pub fn load_corpus(args: &CorpusArgs, config: &mut Config) -> Result<CorpusGraph> {
    args.apply(&mut config.crawl);
    Ok(crawl(&args.corpus, &config.crawl)?)
}

/// Crawl the corpus and resolve the rank parameters for one run
pub fn prepare(args: &RankArgs, mut config: Config) -> Result<(CorpusGraph, Config)> {
    args.apply(&mut config.rank);
    config.rank.validate()?;
    let graph = load_corpus(&args.corpus, &mut config)?;
    Ok((graph, config))
}

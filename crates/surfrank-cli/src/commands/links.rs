//! Corpus link graph command

use crate::app::{CorpusArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use surfrank_core::Config;

/// Print every page with its outbound links after filtering
pub fn run(args: CorpusArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    let graph = super::load_corpus(&args, &mut config)?;
    print!("{}", output::format_links(&graph, format));
    Ok(())
}

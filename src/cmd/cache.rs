use clap::Args;
use std::path::Path;

use wordfit::cache::WidthCache;
use wordfit::config::CacheParams;
use wordfit::error::WfResult;
use wordfit::font::FontFace;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct CacheArgs {
    #[command(flatten)]
    pub params: CacheParams,
}

pub fn run(args: &CacheArgs, font: &Path, words: &Path, cache_path: &Path) -> WfResult<()> {
    args.params.validate()?;

    println!(
        "📖 Computing widths from '{}' (case {}, up to {} words)",
        words.display(),
        args.params.case,
        args.params.max_words
    );

    let metrics = FontFace::load(font)?;
    let cache = WidthCache::recompute(cache_path, words, &metrics, &args.params)?;

    reports::print_cache_summary(&cache, cache_path);
    Ok(())
}

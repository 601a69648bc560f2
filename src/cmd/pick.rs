use clap::Args;
use std::path::Path;

use wordfit::cache::WidthCache;
use wordfit::config::Config;
use wordfit::error::WfResult;
use wordfit::font::FontFace;
use wordfit::selector;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &PickArgs, font: &Path, words: &Path, cache_path: &Path) -> WfResult<()> {
    args.config.validate()?;

    let cache = WidthCache::load_or_compute(
        cache_path,
        words,
        || FontFace::load(font),
        &args.config.cache,
    )?;

    let selection = selector::select(&cache, &args.config.selection);

    let surface = reports::resolve_surface();
    reports::print_selection(surface, &cache, &selection);
    reports::print_diagnostics(&selection, &args.config.selection);
    Ok(())
}

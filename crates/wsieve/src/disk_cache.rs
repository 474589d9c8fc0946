use wordsieve::disk_cache::{WordsieveDiskCache, WordsieveDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory; defaults to ``$WORDSIEVE_CACHE_DIR`` or the user cache dir.
    #[arg(long, default_value = None)]
    cache_dir: Option<String>,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<WordsieveDiskCache, Box<dyn std::error::Error>> {
        let options = WordsieveDiskCacheOptions::default().with_cache_dir(self.cache_dir.as_ref());
        Ok(WordsieveDiskCache::new(options)?)
    }
}

//! # Wordsieve Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{WORDSIEVE_CACHE_CONFIG, checksum, path_utils};

/// Options for [`WordsieveDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct WordsieveDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl WordsieveDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded files.
///
/// Files live at ``<cache_dir>/<context...>/<file name of the first url>``.
pub struct WordsieveDiskCache {
    cache_dir: PathBuf,
    data_dir: PathBuf,
    downloader: Downloader,
}

impl WordsieveDiskCache {
    /// Construct a new [`WordsieveDiskCache`].
    pub fn new(options: WordsieveDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = WORDSIEVE_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = WORDSIEVE_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        Ok(Self {
            cache_dir,
            data_dir,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Get the data path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.data_dir, context, file)
    }

    /// Load a cached file, downloading it from `urls` when missing.
    ///
    /// # Arguments
    /// * `context` - prefix dirs for the cache location.
    /// * `urls` - mirror URLs; the first one names the cached file.
    /// * `hash` - optional hex SHA-256 prefix the file must match.
    /// * `download` - whether a missing file may be downloaded.
    ///
    /// # Errors
    /// * the file is missing and `download` is `false`;
    /// * the download fails;
    /// * the file does not match `hash`. A freshly downloaded file that
    ///   fails verification is removed.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        hash: Option<&str>,
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<&str> = urls.iter().map(|s| s.as_ref()).collect();
        let file_name = urls
            .first()
            .and_then(|url| path_utils::url_file_name(url))
            .context("no usable resource url")?;
        let path = self.cache_path(context, file_name);

        if path.exists() {
            log::debug!("cache hit: {}", path.display());
            if let Some(hash) = hash {
                checksum::verify_file(&path, hash)?;
            }
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        log::info!("downloading {} -> {}", urls[0], path.display());
        let mut dl = Download::new_mirrored(&urls);
        dl.file_name = path.clone();
        for summary in self.downloader.download(&[dl])? {
            summary.context("download failed")?;
        }

        if let Some(hash) = hash
            && let Err(err) = checksum::verify_file(&path, hash)
        {
            fs::remove_file(&path).ok();
            return Err(err);
        }

        Ok(path)
    }
}

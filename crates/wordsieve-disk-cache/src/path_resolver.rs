//! # App Path Resolver
//!
//! Static library defaults for cache/data directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Which of the application directories is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Re-creatable downloads.
    Cache,

    /// User data.
    Data,
}

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for cache directories environment variables.
    pub cache_env_vars: &'static [&'static str],

    /// The resolution order for data directories environment variables.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// The environment variables consulted for `kind`, highest priority first.
    pub fn env_vars(
        &self,
        kind: DirKind,
    ) -> &'static [&'static str] {
        match kind {
            DirKind::Cache => self.cache_env_vars,
            DirKind::Data => self.data_env_vars,
        }
    }

    /// Resolve a directory of the given kind.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each of [`Self::env_vars`]; in order.
    /// 3. the matching [`ProjectDirs`] directory, if present.
    /// 4. `None`
    pub fn resolve<P: AsRef<Path>>(
        &self,
        kind: DirKind,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path {
            return Some(path.as_ref().to_path_buf());
        }

        if let Some(path) = self
            .env_vars(kind)
            .iter()
            .find_map(|var| env::var_os(var))
        {
            return Some(PathBuf::from(path));
        }

        self.project_dirs().map(|pds| match kind {
            DirKind::Cache => pds.cache_dir().to_path_buf(),
            DirKind::Data => pds.data_dir().to_path_buf(),
        })
    }

    /// Resolve the cache directory; see [`Self::resolve`].
    ///
    /// On Linux the project fallback is `$XDG_CACHE_HOME/<app>`
    /// or `$HOME/.cache/<app>`.
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(DirKind::Cache, path)
    }

    /// Resolve the data directory; see [`Self::resolve`].
    ///
    /// On Linux the project fallback is `$XDG_DATA_HOME/<app>`
    /// or `$HOME/.local/share/<app>`.
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve(DirKind::Data, path)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const CACHE_PRIMARY: &str = "_WSIEVE_TEST_CACHE_PRIMARY";
    const CACHE_FALLBACK: &str = "_WSIEVE_TEST_CACHE_FALLBACK";
    const DATA_PRIMARY: &str = "_WSIEVE_TEST_DATA_PRIMARY";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io",
        organization: "crates",
        application: "wordsieve-test",
        cache_env_vars: &[CACHE_PRIMARY, CACHE_FALLBACK],
        data_env_vars: &[DATA_PRIMARY],
    };

    fn clear_env() {
        unsafe {
            env::remove_var(CACHE_PRIMARY);
            env::remove_var(CACHE_FALLBACK);
            env::remove_var(DATA_PRIMARY);
        }
    }

    #[test]
    #[serial]
    fn test_explicit_path_wins() {
        clear_env();
        unsafe {
            env::set_var(CACHE_PRIMARY, "/tmp/wordsieve/env");
        }

        let explicit = PathBuf::from("/tmp/wordsieve/explicit");
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(Some(&explicit)),
            Some(explicit.clone())
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_priority_order() {
        clear_env();
        let none: Option<PathBuf> = None;

        unsafe {
            env::set_var(CACHE_FALLBACK, "/tmp/wordsieve/fallback");
        }
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(none.clone()),
            Some(PathBuf::from("/tmp/wordsieve/fallback"))
        );

        unsafe {
            env::set_var(CACHE_PRIMARY, "/tmp/wordsieve/primary");
        }
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(none.clone()),
            Some(PathBuf::from("/tmp/wordsieve/primary"))
        );

        // Data resolution ignores the cache variables.
        let pds = TEST_CONFIG.project_dirs().unwrap();
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(none),
            Some(pds.data_dir().to_path_buf())
        );

        clear_env();
    }
}

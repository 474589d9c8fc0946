//! # Path Utilities

use std::path::{Path, PathBuf};

/// Join `context` dirs and a final `filename` onto `base`.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
pub fn extend_path<P, S, F>(
    base: P,
    context: &[S],
    filename: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = base.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(filename.as_ref());
    path
}

/// The last `/`-separated segment of a URL, without query or fragment.
pub fn url_file_name(url: &str) -> Option<&str> {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_path() {
        let path = extend_path("/tmp/wordsieve", &["kogpt2"], "tokenizer.json");
        assert_eq!(path, PathBuf::from("/tmp/wordsieve/kogpt2/tokenizer.json"));

        let empty: &[&str] = &[];
        assert_eq!(
            extend_path("/tmp", empty, "a.txt"),
            PathBuf::from("/tmp/a.txt")
        );
    }

    #[test]
    fn test_url_file_name() {
        assert_eq!(
            url_file_name("https://example.com/models/tokenizer.json?download=true"),
            Some("tokenizer.json")
        );
        assert_eq!(url_file_name("https://example.com/models/"), None);
    }
}

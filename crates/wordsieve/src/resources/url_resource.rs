//! # Remote Resources

/// A file with constant mirror URLs and an optional hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstUrlResource {
    /// Mirror URLs; the first one names the cached file.
    pub urls: &'static [&'static str],

    /// Hex SHA-256 (or a prefix of it), if pinned.
    pub hash: Option<&'static str>,
}

/// A [`ConstUrlResource`] with a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstKeyedResource {
    /// Cache sub-directories, in place of the URL.
    pub key: &'static [&'static str],

    /// The resource.
    pub resource: ConstUrlResource,
}

/// An owned, keyed remote resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyedResource {
    /// Cache sub-directories, in place of the URL.
    pub key: Vec<String>,

    /// Mirror URLs; the first one names the cached file.
    pub urls: Vec<String>,

    /// Hex SHA-256 (or a prefix of it), if pinned.
    pub hash: Option<String>,
}

impl From<ConstKeyedResource> for KeyedResource {
    fn from(resource: ConstKeyedResource) -> Self {
        Self {
            key: resource.key.iter().map(|s| s.to_string()).collect(),
            urls: resource.resource.urls.iter().map(|s| s.to_string()).collect(),
            hash: resource.resource.hash.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_resource() {
        let cres = ConstKeyedResource {
            key: &["models", "demo"],
            resource: ConstUrlResource {
                urls: &["https://example.com/a/tokenizer.json"],
                hash: Some("abc123"),
            },
        };

        let res: KeyedResource = cres.into();
        assert_eq!(res.key, vec!["models".to_string(), "demo".to_string()]);
        assert_eq!(res.urls, vec!["https://example.com/a/tokenizer.json".to_string()]);
        assert_eq!(res.hash.as_deref(), Some("abc123"));
    }
}

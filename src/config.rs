//! Client configuration: backend base URL, image CDN rewriting, search paging.
//!
//! The browser build uses [`ClientConfig::default`] with a same-origin base
//! URL; the CLI layers `clap` args over [`ClientConfig::from_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_BUCKET_MARKER: &str = "final17-bucket.s3";
pub const DEFAULT_CDN_BASE_URL: &str = "https://d1bmwiwkiumqh6.cloudfront.net";
pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "/images/store-placeholder.png";
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;

/// How raw storage image URLs are rewritten for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Substring identifying a URL served straight from the storage bucket.
    pub bucket_marker: String,
    /// CDN origin the object key is re-rooted under (no trailing slash).
    pub cdn_base: String,
    /// Shown when a store has no image at all.
    pub placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            bucket_marker: DEFAULT_BUCKET_MARKER.to_owned(),
            cdn_base: DEFAULT_CDN_BASE_URL.to_owned(),
            placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path; empty means same origin.
    pub api_base_url: String,
    pub image: ImageConfig,
    /// `size` sent with every store search.
    pub search_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            image: ImageConfig::default(),
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Build config from environment variables, defaulting anything unset.
    ///
    /// - `STOREFRONT_API_BASE_URL`: backend origin, trailing `/` stripped
    /// - `STOREFRONT_CDN_BASE_URL`: CDN origin for rewritten bucket images
    /// - `STOREFRONT_IMAGE_PLACEHOLDER`: image shown for stores without one
    /// - `STOREFRONT_SEARCH_PAGE_SIZE`: default 10; unparsable values fall back
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: trim_base(&env_or("STOREFRONT_API_BASE_URL", &defaults.api_base_url)),
            image: ImageConfig {
                bucket_marker: defaults.image.bucket_marker,
                cdn_base: trim_base(&env_or("STOREFRONT_CDN_BASE_URL", &defaults.image.cdn_base)),
                placeholder: env_or("STOREFRONT_IMAGE_PLACEHOLDER", &defaults.image.placeholder),
            },
            search_page_size: env_parse_u32("STOREFRONT_SEARCH_PAGE_SIZE", defaults.search_page_size),
        }
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

pub fn trim_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_owned(),
    }
}

fn env_parse_u32(key: &str, default: u32) -> u32 {
    match std::env::var(key).map(|v| v.trim().parse::<u32>()) {
        Ok(Ok(value)) if value > 0 => value,
        _ => default,
    }
}

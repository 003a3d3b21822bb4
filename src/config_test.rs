use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_lock()` so env mutation is serialized across tests.
unsafe fn clear_storefront_env() {
    unsafe {
        std::env::remove_var("STOREFRONT_API_BASE_URL");
        std::env::remove_var("STOREFRONT_CDN_BASE_URL");
        std::env::remove_var("STOREFRONT_IMAGE_PLACEHOLDER");
        std::env::remove_var("STOREFRONT_SEARCH_PAGE_SIZE");
    }
}

#[test]
fn from_env_defaults_when_unset() {
    let _guard = env_lock();
    unsafe { clear_storefront_env() };

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.search_page_size, 10);
    assert_eq!(cfg.image.cdn_base, DEFAULT_CDN_BASE_URL);
}

#[test]
fn from_env_reads_overrides_and_trims_slashes() {
    let _guard = env_lock();
    unsafe {
        clear_storefront_env();
        std::env::set_var("STOREFRONT_API_BASE_URL", "https://api.example.test/");
        std::env::set_var("STOREFRONT_CDN_BASE_URL", "https://cdn.example.test//");
        std::env::set_var("STOREFRONT_IMAGE_PLACEHOLDER", "/img/none.svg");
        std::env::set_var("STOREFRONT_SEARCH_PAGE_SIZE", "25");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.api_base_url, "https://api.example.test");
    assert_eq!(cfg.image.cdn_base, "https://cdn.example.test");
    assert_eq!(cfg.image.placeholder, "/img/none.svg");
    assert_eq!(cfg.search_page_size, 25);

    unsafe { clear_storefront_env() };
}

#[test]
fn from_env_ignores_bad_page_size() {
    let _guard = env_lock();
    unsafe {
        clear_storefront_env();
        std::env::set_var("STOREFRONT_SEARCH_PAGE_SIZE", "lots");
    }
    assert_eq!(ClientConfig::from_env().search_page_size, DEFAULT_SEARCH_PAGE_SIZE);

    unsafe { std::env::set_var("STOREFRONT_SEARCH_PAGE_SIZE", "0") };
    assert_eq!(ClientConfig::from_env().search_page_size, DEFAULT_SEARCH_PAGE_SIZE);

    unsafe { clear_storefront_env() };
}

#[test]
fn url_joins_base_and_path() {
    let cfg = ClientConfig { api_base_url: "http://localhost:8080".to_owned(), ..ClientConfig::default() };
    assert_eq!(cfg.url("/api/stores"), "http://localhost:8080/api/stores");
    assert_eq!(ClientConfig::default().url("/api/stores"), "/api/stores");
}

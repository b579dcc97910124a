use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use tracing::{debug, warn};

/// Largest page size the vendor accepts on list endpoints.
pub const MAX_PAGE_SIZE: u32 = 300;

pub const PAGE_SIZE_VAR: &str = "MEETING_API_PAGE_SIZE";
pub const MAX_PAGES_VAR: &str = "MEETING_API_MAX_PAGES";

// Options used when walking a paginated list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationOptions {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

pub fn default_page_size() -> u32 {
    30
}

pub fn default_max_pages() -> u32 {
    100
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl PaginationOptions {
    /// Load options from environment variables, reading `.env` if present
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let page_size = parse_var(&lookup, PAGE_SIZE_VAR).unwrap_or(defaults.page_size);
        let max_pages = parse_var(&lookup, MAX_PAGES_VAR).unwrap_or(defaults.max_pages);

        let options = Self {
            page_size: clamp_page_size(page_size),
            max_pages: max_pages.max(1),
        };
        debug!(
            page_size = options.page_size,
            max_pages = options.max_pages,
            "Loaded pagination options"
        );
        options
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }
}

fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a positive integer", key, raw);
            None
        }
    }
}

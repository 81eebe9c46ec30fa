//! Project image fallbacks
//!
//! Project screenshots are referenced by local filename. When the file is
//! not bundled, or fails to load, the image is pointed at a remote
//! placeholder instead. Resolution never fails.

use std::collections::BTreeMap;

/// Placeholder used for any filename without a dedicated entry.
pub const DEFAULT_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop";

const BUILTIN_PLACEHOLDERS: &[(&str, &str)] = &[
    (
        "weather-app.jpg",
        "https://images.unsplash.com/photo-1592210454359-9043f067919b?w=800&h=600&fit=crop",
    ),
    (
        "news-app.jpg",
        "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=600&fit=crop",
    ),
    (
        "backend.jpg",
        "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=600&fit=crop",
    ),
    (
        "ecommerce-testing.jpg",
        "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=600&fit=crop",
    ),
    (
        "chatbot-testing.jpg",
        "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=800&h=600&fit=crop",
    ),
    (
        "logistics-testing.jpg",
        "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=800&h=600&fit=crop",
    ),
];

/// Filename to placeholder URL lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderMap {
    entries: BTreeMap<String, String>,
    default: String,
}

impl Default for PlaceholderMap {
    fn default() -> Self {
        Self {
            entries: BUILTIN_PLACEHOLDERS
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
            default: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl PlaceholderMap {
    /// Built-in entries with `overrides` merged on top.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut map = Self::default();
        for (name, url) in overrides {
            map.entries.insert(name.clone(), url.clone());
        }
        map
    }

    /// Placeholder for a source path, falling back to the default.
    pub fn placeholder_for(&self, src: &str) -> &str {
        self.entries
            .get(filename(src))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    /// Source to render before any load attempt.
    ///
    /// Absolute URLs are trusted as-is; anything else is swapped for its
    /// placeholder right away.
    pub fn initial_source<'a>(&'a self, src: &'a str) -> &'a str {
        if is_absolute_url(src) {
            src
        } else {
            self.placeholder_for(src)
        }
    }

    /// Source to use after the image reported a load error.
    pub fn on_error(&self, src: &str) -> &str {
        let replacement = self.placeholder_for(src);
        tracing::debug!(src, replacement, "Image failed to load, substituting placeholder");
        replacement
    }
}

/// Last path segment of a source reference.
pub fn filename(src: &str) -> &str {
    src.rsplit('/').next().unwrap_or(src)
}

pub fn is_absolute_url(src: &str) -> bool {
    src.starts_with("http")
}

/// Render state of one project image.
///
/// Holds the configured source so a load error maps back to the right
/// placeholder even after the rendered source has already been replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    configured: String,
    current: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(configured: impl Into<String>, placeholders: &PlaceholderMap) -> Self {
        let configured = configured.into();
        let current = placeholders.initial_source(&configured).to_string();
        Self {
            configured,
            current,
            failed: false,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn configured(&self) -> &str {
        &self.configured
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Swap in the placeholder after a load error.
    ///
    /// A second error (the placeholder itself failing) leaves the source
    /// alone so the page does not loop on reloads.
    pub fn handle_error(&mut self, placeholders: &PlaceholderMap) {
        if self.failed {
            return;
        }
        self.failed = true;
        let replacement = placeholders.on_error(&self.configured);
        if replacement != self.current {
            self.current = replacement.to_string();
        }
    }
}
